//! Ledger - the owned, mutable people and expense collections
//!
//! Every change goes through the validation layer first. Balances and
//! settlements are recomputed from scratch on each call; nothing is cached.

use chrono::Utc;
use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::{Balances, Expense, Group, Person, SimplifiedDebt};
use crate::services::calculator::calculate_balances;
use crate::services::simplifier::simplify_debts;
use crate::services::validation::{check_person_removal, validate_person_name, ExpenseDraft};

#[derive(Debug, Default)]
pub struct Ledger {
    people: Vec<Person>,
    expenses: Vec<Expense>,
    last_expense_id: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over an existing group without re-validating it
    pub fn from_group(group: Group) -> Self {
        let last_expense_id = group.expenses.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            people: group.people,
            expenses: group.expenses,
            last_expense_id,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> Group {
        Group::new(self.people.clone(), self.expenses.clone())
    }

    /// Add a person after checking the name
    pub fn add_person(&mut self, name: &str) -> Result<&Person> {
        let name = validate_person_name(name, &self.people)?;
        let person = Person::new(name);
        info!(person_id = %person.id, "added person");
        self.people.push(person);
        Ok(&self.people[self.people.len() - 1])
    }

    /// Remove a person who is not referenced by any expense
    pub fn remove_person(&mut self, id: &str) -> Result<Person> {
        check_person_removal(id, &self.people, &self.expenses)?;
        let pos = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("Person {}", id)))?;
        info!(person_id = id, "removed person");
        Ok(self.people.remove(pos))
    }

    /// Validate a draft and record it as a new expense
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<&Expense> {
        draft.validate(&self.people)?;
        let id = self.next_expense_id()?;
        let expense = draft.into_expense(id);
        info!(expense_id = id, split = expense.split_type.as_str(), "added expense");
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn remove_expense(&mut self, id: i64) -> Result<Expense> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::not_found(format!("Expense {}", id)))?;
        info!(expense_id = id, "removed expense");
        Ok(self.expenses.remove(pos))
    }

    pub fn balances(&self) -> Balances {
        calculate_balances(&self.people, &self.expenses)
    }

    pub fn settlements(&self) -> Vec<SimplifiedDebt> {
        simplify_debts(&self.balances())
    }

    /// Millisecond timestamp, bumped past the last id handed out
    fn next_expense_id(&mut self) -> Result<i64> {
        let bumped = self
            .last_expense_id
            .checked_add(1)
            .ok_or_else(|| Error::validation("no expense ids left after the largest existing id"))?;
        self.last_expense_id = Utc::now().timestamp_millis().max(bumped);
        Ok(self.last_expense_id)
    }
}
