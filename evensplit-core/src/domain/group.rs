//! Group snapshot domain model

use serde::{Deserialize, Serialize};

use super::{Expense, Person};

/// Immutable snapshot of a group's people and expenses
///
/// This is the shape of a group document and what every calculation reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Group {
    pub fn new(people: Vec<Person>, expenses: Vec<Expense>) -> Self {
        Self { people, expenses }
    }

    /// Sum of all expense amounts
    pub fn total_spending(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
