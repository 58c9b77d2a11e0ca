//! Core domain entities
//!
//! All entities are defined here. These are pure data structures with no I/O
//! or external dependencies.

pub mod balance;
mod expense;
mod group;
mod person;
pub mod result;
pub mod settlement;

pub use balance::Balances;
pub use expense::{Expense, SplitType};
pub use group::Group;
pub use person::{name_of, Person};
pub use settlement::{DirectDebt, DirectDebts, SimplifiedDebt, SETTLE_TOLERANCE};
