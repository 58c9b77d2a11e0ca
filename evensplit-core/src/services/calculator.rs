//! Balance calculation - folds expenses into net balances

use tracing::debug;

use crate::domain::{Balances, Expense, Person};

/// Compute every person's net balance from the expense list
///
/// Every person starts at zero, so people without any activity still get an
/// entry. For each expense the payer is credited the full amount and each
/// participant is debited their share (see [`Expense::shares`]).
///
/// Ids that do not belong to a known person are skipped rather than treated
/// as errors, and never add entries to the result. No rounding happens here;
/// the fold is order-independent up to float addition.
pub fn calculate_balances(people: &[Person], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::zeroed(people.iter().map(|p| p.id.as_str()));

    for expense in expenses {
        if !balances.adjust(&expense.paid_by, expense.amount) {
            debug!(
                expense_id = expense.id,
                person_id = %expense.paid_by,
                "skipping credit for unknown payer"
            );
        }

        for (person_id, share) in expense.shares() {
            if !balances.adjust(person_id, -share) {
                debug!(
                    expense_id = expense.id,
                    person_id, "skipping share for unknown participant"
                );
            }
        }
    }

    debug!(
        people = balances.len(),
        expenses = expenses.len(),
        "calculated balances"
    );
    balances
}
