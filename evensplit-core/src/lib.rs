//! EvenSplit Core - shared expense balances and settlements
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Person, Expense, Balances, SimplifiedDebt)
//! - **ports**: Trait definitions for external dependencies (GroupSource)
//! - **services**: Balance calculation, debt simplification, validation, ledger
//! - **adapters**: Concrete implementations (JSON group documents)
//!
//! The two calculations are plain functions over immutable slices:
//!
//! ```
//! use evensplit_core::{calculate_balances, simplify_debts, Expense, Person};
//!
//! let people = vec![Person::with_id("a", "Alice"), Person::with_id("b", "Bob")];
//! let expenses = vec![Expense::equal(1, "Dinner", 60.0, "a", &["a", "b"])];
//!
//! let balances = calculate_balances(&people, &expenses);
//! let settlements = simplify_debts(&balances);
//! assert_eq!(settlements[0].from, "b");
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use config::Config;
use services::SettlementService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    Balances, DirectDebt, DirectDebts, Expense, Group, Person, SimplifiedDebt, SplitType,
    SETTLE_TOLERANCE,
};
pub use services::{calculate_balances, direct_debts, simplify_debts};

/// Main context for EvenSplit operations
///
/// Holds the loaded configuration and the services configured from it.
pub struct EvenSplitContext {
    pub config: Config,
    pub settlement_service: SettlementService,
}

impl EvenSplitContext {
    /// Create a context from the settings in `dir`
    pub fn new(dir: &Path) -> Result<Self> {
        let config = Config::load(dir)?;
        debug!(strict = config.strict_references, "loaded config");

        let settlement_service = SettlementService::new(config.strict_references);

        Ok(Self {
            config,
            settlement_service,
        })
    }
}
