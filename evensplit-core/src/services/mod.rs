//! Service layer - business logic
//!
//! The calculator and simplifier are the pure core. The remaining services
//! validate input, own mutable state, or assemble results for display.

pub mod calculator;
pub mod direct_debts;
pub mod ledger;
pub mod settlement;
pub mod simplifier;
pub mod validation;

pub use calculator::calculate_balances;
pub use direct_debts::direct_debts;
pub use ledger::Ledger;
pub use settlement::{BalanceLine, GroupSummary, SettlementLine, SettlementService, Standing};
pub use simplifier::{check_settleable, is_settled, simplify_debts};
pub use validation::{
    audit_group, check_person_removal, check_references, validate_expense_split,
    validate_person_name, AuditIssue, ExpenseDraft,
};
