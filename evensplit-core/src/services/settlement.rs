//! Settlement service - balances, settlements and summaries for a group

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::domain::result::Result;
use crate::domain::{name_of, Balances, DirectDebts, Group, SimplifiedDebt};
use crate::services::calculator::calculate_balances;
use crate::services::direct_debts::direct_debts;
use crate::services::simplifier::{check_settleable, is_settled, simplify_debts};
use crate::services::validation::check_references;

/// Settlement service for group snapshots
///
/// In strict mode every call first checks that the group only references
/// known people and fails otherwise. In lenient mode unknown ids are skipped.
pub struct SettlementService {
    strict_references: bool,
}

impl SettlementService {
    pub fn new(strict_references: bool) -> Self {
        Self { strict_references }
    }

    fn check(&self, group: &Group) -> Result<()> {
        if self.strict_references {
            check_references(group)?;
        }
        Ok(())
    }

    /// Net balance per person
    pub fn balances(&self, group: &Group) -> Result<Balances> {
        self.check(group)?;
        Ok(calculate_balances(&group.people, &group.expenses))
    }

    /// Simplified list of payments that settles the group
    pub fn settlements(&self, group: &Group) -> Result<Vec<SimplifiedDebt>> {
        let balances = self.balances(group)?;
        check_settleable(&balances)?;
        Ok(simplify_debts(&balances))
    }

    /// Pairwise debts before simplification
    pub fn direct_debts(&self, group: &Group) -> Result<DirectDebts> {
        self.check(group)?;
        Ok(direct_debts(&group.expenses))
    }

    /// Everything a balance view shows, with names resolved
    pub fn summarize(&self, group: &Group) -> Result<GroupSummary> {
        let balances = self.balances(group)?;
        check_settleable(&balances)?;
        let settlements = simplify_debts(&balances);

        let balance_lines = group
            .people
            .iter()
            .map(|person| {
                let balance = balances.get(&person.id).unwrap_or_default();
                BalanceLine {
                    person_id: person.id.clone(),
                    name: person.name.clone(),
                    balance,
                    standing: Standing::of(balance),
                }
            })
            .collect();

        let settlement_lines: Vec<SettlementLine> = settlements
            .into_iter()
            .map(|s| SettlementLine {
                from_name: name_of(&group.people, &s.from).to_string(),
                to_name: name_of(&group.people, &s.to).to_string(),
                from: s.from,
                to: s.to,
                amount: s.amount,
            })
            .collect();

        info!(
            people = group.people.len(),
            expenses = group.expenses.len(),
            settlements = settlement_lines.len(),
            "summarized group"
        );

        Ok(GroupSummary {
            total_spending: group.total_spending(),
            expense_count: group.expenses.len(),
            balances: balance_lines,
            settlements: settlement_lines,
        })
    }
}

/// Whether a person is owed money, owes money or is square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    IsOwed,
    Owes,
    Settled,
}

impl Standing {
    /// Classify with the same threshold the simplifier uses
    pub fn of(balance: f64) -> Self {
        if is_settled(balance) {
            Standing::Settled
        } else if balance > 0.0 {
            Standing::IsOwed
        } else {
            Standing::Owes
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Standing::IsOwed => "is owed",
            Standing::Owes => "owes",
            Standing::Settled => "settled",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub total_spending: f64,
    pub expense_count: usize,
    pub balances: Vec<BalanceLine>,
    pub settlements: Vec<SettlementLine>,
}

#[derive(Debug, Serialize)]
pub struct BalanceLine {
    pub person_id: String,
    pub name: String,
    pub balance: f64,
    pub standing: Standing,
}

#[derive(Debug, Serialize)]
pub struct SettlementLine {
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub to_name: String,
    pub amount: Decimal,
}
