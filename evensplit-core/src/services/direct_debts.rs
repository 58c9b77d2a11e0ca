//! Direct debts - who owes whom before simplification

use crate::domain::{DirectDebts, Expense};

/// Accumulate what each participant owes each payer across all expenses
///
/// A participant's share of an expense becomes a debt to that expense's
/// payer. The payer's own share is not a debt, so there are never
/// self-debts.
pub fn direct_debts(expenses: &[Expense]) -> DirectDebts {
    let mut debts = DirectDebts::new();
    for expense in expenses {
        for (person_id, share) in expense.shares() {
            if person_id != expense.paid_by {
                debts.record(person_id, &expense.paid_by, share);
            }
        }
    }
    debts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participants_owe_payer() {
        let expenses = vec![Expense::equal(
            1,
            "Dinner",
            60.0,
            "Alice",
            &["Alice", "Bob", "Charlie"],
        )];

        let debts = direct_debts(&expenses);

        assert_eq!(debts.get("Bob", "Alice"), Some(20.0));
        assert_eq!(debts.get("Charlie", "Alice"), Some(20.0));
        assert_eq!(debts.get("Alice", "Alice"), None);
    }

    #[test]
    fn test_debts_accumulate_between_same_people() {
        let expenses = vec![
            Expense::equal(1, "Lunch", 40.0, "Alice", &["Alice", "Bob"]),
            Expense::equal(2, "Dinner", 60.0, "Alice", &["Alice", "Bob"]),
        ];

        let debts = direct_debts(&expenses);

        assert_eq!(debts.get("Bob", "Alice"), Some(50.0));
        assert_eq!(debts.len(), 1);
    }

    #[test]
    fn test_opposite_debts_are_kept_apart() {
        let expenses = vec![
            Expense::equal(1, "Lunch", 40.0, "Alice", &["Alice", "Bob"]),
            Expense::custom(2, "Cab", 15.0, "Bob", &[("Alice", 15.0)]),
        ];

        let debts = direct_debts(&expenses);

        assert_eq!(debts.get("Bob", "Alice"), Some(20.0));
        assert_eq!(debts.get("Alice", "Bob"), Some(15.0));
    }
}
