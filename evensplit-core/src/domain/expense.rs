//! Expense domain model

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How an expense is divided among its participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Equal,
    Custom,
}

impl SplitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitType::Equal => "equal",
            SplitType::Custom => "custom",
        }
    }
}

/// A recorded expense paid by one person on behalf of the participants
///
/// Field names serialize in camelCase so group documents use the same
/// `paidBy` / `splitBetween` / `customAmounts` keys as the recorded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    /// Person id of the payer
    pub paid_by: String,
    /// Person ids sharing the expense (may include the payer)
    pub split_between: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub split_type: SplitType,
    /// Per-person amounts, only meaningful for custom splits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amounts: Option<HashMap<String, f64>>,
}

impl Expense {
    /// Create an expense split equally between the participants
    pub fn equal(
        id: i64,
        description: impl Into<String>,
        amount: f64,
        paid_by: impl Into<String>,
        split_between: &[&str],
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_between: split_between.iter().map(|s| s.to_string()).collect(),
            date: None,
            split_type: SplitType::Equal,
            custom_amounts: None,
        }
    }

    /// Create an expense with explicit per-person amounts
    ///
    /// The participants are the keys of `amounts`, in the given order.
    pub fn custom(
        id: i64,
        description: impl Into<String>,
        amount: f64,
        paid_by: impl Into<String>,
        amounts: &[(&str, f64)],
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_between: amounts.iter().map(|(id, _)| id.to_string()).collect(),
            date: None,
            split_type: SplitType::Custom,
            custom_amounts: Some(
                amounts
                    .iter()
                    .map(|(id, value)| (id.to_string(), *value))
                    .collect(),
            ),
        }
    }

    /// Set the expense date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Each participant's share of this expense, in `split_between` order
    ///
    /// Equal splits give every listed id `amount / n`, the payer included when
    /// listed. Custom splits debit only listed ids that have an entry in
    /// `custom_amounts`; a listed id without an entry gets nothing.
    pub fn shares(&self) -> Vec<(&str, f64)> {
        match self.split_type {
            SplitType::Equal => {
                if self.split_between.is_empty() {
                    return Vec::new();
                }
                let share = self.amount / self.split_between.len() as f64;
                self.split_between
                    .iter()
                    .map(|id| (id.as_str(), share))
                    .collect()
            }
            SplitType::Custom => match &self.custom_amounts {
                Some(amounts) => self
                    .split_between
                    .iter()
                    .filter_map(|id| amounts.get(id).map(|value| (id.as_str(), *value)))
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// True if the person paid for or takes part in this expense
    pub fn involves(&self, person_id: &str) -> bool {
        self.paid_by == person_id || self.split_between.iter().any(|id| id == person_id)
    }
}
