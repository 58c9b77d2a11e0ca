//! Debt simplification - greedy matching of debtors to creditors
//!
//! Balances are rounded to cents, split into debtors and creditors, sorted
//! largest first and matched with two cursors. Each step settles the smaller
//! of the two outstanding amounts, so every step clears at least one side and
//! the walk emits at most `debtors + creditors - 1` payments.
//!
//! This is a greedy approximation. It is minimal when few distinct balance
//! magnitudes are involved, but finding the true minimum number of payments
//! is a partition problem (NP-hard) and is not attempted.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::domain::result::{Error, Result};
use crate::domain::{Balances, SimplifiedDebt, SETTLE_TOLERANCE};

/// Slack applied to the settle threshold to absorb float noise around 0.01
const FLOAT_SLACK: f64 = 1e-9;

/// A person with an outstanding amount, always positive, in cents
#[derive(Debug)]
struct Outstanding<'a> {
    id: &'a str,
    amount: Decimal,
}

/// Round to whole cents, half away from zero
///
/// None when the value does not fit in a `Decimal` (beyond about 7.9e28).
fn to_cents(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// True if the balance is small enough to count as settled
pub fn is_settled(balance: f64) -> bool {
    !balance.is_finite() || balance.abs() <= SETTLE_TOLERANCE + FLOAT_SLACK
}

/// Fail if any active balance cannot be expressed in cents
///
/// [`simplify_debts`] leaves such balances out, which would make the group
/// look settled when it is not.
pub fn check_settleable(balances: &Balances) -> Result<()> {
    for (id, balance) in balances.iter() {
        let representable =
            balance.is_finite() && (is_settled(balance) || to_cents(balance.abs()).is_some());
        if !representable {
            return Err(Error::validation(format!(
                "balance {} for {} is too large to settle",
                balance, id
            )));
        }
    }
    Ok(())
}

/// Reduce net balances to a list of point-to-point payments
///
/// Balances too large for a `Decimal` are skipped with a warning; see
/// [`check_settleable`]. Payments come out in the order of the greedy walk: largest debtor first,
/// paying the largest creditor first. Ties keep the balance table order.
pub fn simplify_debts(balances: &Balances) -> Vec<SimplifiedDebt> {
    let mut debtors: Vec<Outstanding> = Vec::new();
    let mut creditors: Vec<Outstanding> = Vec::new();

    for (id, balance) in balances.iter() {
        if is_settled(balance) {
            continue;
        }
        let Some(amount) = to_cents(balance.abs()) else {
            warn!(person_id = id, balance, "balance out of range, left out of settlements");
            continue;
        };
        if balance < 0.0 {
            debtors.push(Outstanding { id, amount });
        } else {
            creditors.push(Outstanding { id, amount });
        }
    }

    // Stable sorts: equal amounts stay in balance table order
    debtors.sort_by(|a, b| b.amount.cmp(&a.amount));
    creditors.sort_by(|a, b| b.amount.cmp(&a.amount));

    debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        "simplifying debts"
    );

    let cent = Decimal::new(1, 2);
    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].amount.min(creditors[j].amount);

        if amount > Decimal::ZERO {
            settlements.push(SimplifiedDebt {
                from: debtors[i].id.to_string(),
                to: creditors[j].id.to_string(),
                amount,
            });
        }

        debtors[i].amount -= amount;
        creditors[j].amount -= amount;

        if debtors[i].amount < cent {
            i += 1;
        }
        if creditors[j].amount < cent {
            j += 1;
        }
    }

    if i < debtors.len() || j < creditors.len() {
        // Only reachable when the input does not sum to zero
        debug!(
            unmatched_debtors = debtors.len() - i,
            unmatched_creditors = creditors.len() - j,
            "balances did not net to zero"
        );
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, f64)]) -> Balances {
        entries.iter().map(|(id, b)| (*id, *b)).collect()
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_empty_balances() {
        assert!(simplify_debts(&Balances::new()).is_empty());
    }

    #[test]
    fn test_all_zero_balances() {
        let b = balances(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]);
        assert!(simplify_debts(&b).is_empty());
    }

    #[test]
    fn test_single_pair() {
        let b = balances(&[("a", -10.0), ("b", 0.0), ("c", 10.0)]);
        let settlements = simplify_debts(&b);

        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].from, "a");
        assert_eq!(settlements[0].to, "c");
        assert_eq!(settlements[0].amount, dec("10"));
    }

    #[test]
    fn test_largest_debtor_pays_first() {
        let b = balances(&[("alice", 100.0), ("bob", -40.0), ("charlie", -60.0)]);
        let settlements = simplify_debts(&b);

        assert_eq!(
            settlements,
            vec![
                SimplifiedDebt {
                    from: "charlie".into(),
                    to: "alice".into(),
                    amount: dec("60"),
                },
                SimplifiedDebt {
                    from: "bob".into(),
                    to: "alice".into(),
                    amount: dec("40"),
                },
            ]
        );
    }

    #[test]
    fn test_debtor_split_across_creditors() {
        let b = balances(&[("a", 30.0), ("b", 20.0), ("c", -50.0)]);
        let settlements = simplify_debts(&b);

        assert_eq!(settlements.len(), 2);
        assert_eq!((settlements[0].to.as_str(), settlements[0].amount), ("a", dec("30")));
        assert_eq!((settlements[1].to.as_str(), settlements[1].amount), ("b", dec("20")));
    }

    #[test]
    fn test_thirds_round_to_cents() {
        let third = 100.0 / 3.0;
        let b = balances(&[("a", 2.0 * third), ("b", -third), ("c", -third)]);
        let settlements = simplify_debts(&b);

        assert_eq!(settlements.len(), 2);
        assert!(settlements.iter().all(|s| s.amount == dec("33.33")));
    }

    #[test]
    fn test_settle_threshold_boundary() {
        assert!(is_settled(0.009));
        assert!(is_settled(-0.009));
        assert!(is_settled(0.01));
        assert!(!is_settled(0.011));
        assert!(!is_settled(-0.011));

        let b = balances(&[("a", 0.009), ("b", -0.009)]);
        assert!(simplify_debts(&b).is_empty());

        let b = balances(&[("a", 0.011), ("b", -0.011)]);
        let settlements = simplify_debts(&b);
        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].amount, dec("0.01"));
    }

    #[test]
    fn test_ties_keep_table_order() {
        let b = balances(&[("x", -5.0), ("y", -5.0), ("z", 10.0)]);
        let settlements = simplify_debts(&b);

        let from: Vec<&str> = settlements.iter().map(|s| s.from.as_str()).collect();
        assert_eq!(from, vec!["x", "y"]);
    }

    #[test]
    fn test_unbalanced_input_terminates() {
        let b = balances(&[("a", -10.0), ("b", 4.0)]);
        let settlements = simplify_debts(&b);

        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].amount, dec("4"));
    }

    #[test]
    fn test_out_of_range_balances_are_not_settled() {
        let b = balances(&[("a", 1e29), ("b", -1e29)]);
        assert!(simplify_debts(&b).is_empty());
        assert!(matches!(check_settleable(&b), Err(Error::Validation(_))));

        let b = balances(&[("a", 1e20), ("b", -1e20), ("c", 0.0)]);
        assert!(check_settleable(&b).is_ok());
        assert_eq!(simplify_debts(&b).len(), 1);
    }
}
