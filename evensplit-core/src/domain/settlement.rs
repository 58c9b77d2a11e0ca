//! Settlement domain models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Magnitude at or below which an amount counts as settled.
///
/// Shared by the debt simplifier, the balance standing shown to users and the
/// custom split sum check; they must agree or a split that passes validation
/// can leave a stray cent behind.
pub const SETTLE_TOLERANCE: f64 = 0.01;

/// A single proposed payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedDebt {
    /// Person id of the debtor
    pub from: String,
    /// Person id of the creditor
    pub to: String,
    /// Always positive, in whole cents
    pub amount: Decimal,
}

/// Un-simplified debt from one participant to one payer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectDebt {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Pairwise debts accumulated across expenses, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DirectDebts {
    debts: Vec<DirectDebt>,
}

impl DirectDebts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the debt `from -> to`
    pub fn record(&mut self, from: &str, to: &str, amount: f64) {
        match self
            .debts
            .iter_mut()
            .find(|d| d.from == from && d.to == to)
        {
            Some(debt) => debt.amount += amount,
            None => self.debts.push(DirectDebt {
                from: from.to_string(),
                to: to.to_string(),
                amount,
            }),
        }
    }

    /// Amount `from` owes `to`, if any debt between them was recorded
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.debts
            .iter()
            .find(|d| d.from == from && d.to == to)
            .map(|d| d.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectDebt> {
        self.debts.iter()
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}
