//! Summary command - spending, balances and settlements in one view

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use evensplit_core::services::Standing;

use super::{get_context, load_group, wants_json};
use crate::output::{create_table, money, money_decimal, signed_money};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let group = load_group(file)?;
    let summary = ctx.settlement_service.summarize(&group)?;

    if wants_json(json, &ctx) {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.expense_count == 0 {
        println!("{}", "Add expenses to see who owes whom.".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        "Total Group Spending:".bold(),
        money(summary.total_spending).bold()
    );
    println!();

    println!("{}", "Individual Balances".bold());
    let mut table = create_table();
    table.set_header(vec!["Person", "Standing", "Balance"]);
    for line in &summary.balances {
        let amount = match line.standing {
            Standing::IsOwed => signed_money(line.balance).green().to_string(),
            Standing::Owes => signed_money(line.balance).red().to_string(),
            Standing::Settled => String::new(),
        };
        table.add_row(vec![line.name.clone(), line.standing.label().to_string(), amount]);
    }
    println!("{}", table);
    println!();

    println!("{}", "Suggested Settlements".bold());
    if summary.settlements.is_empty() {
        println!("{}", "All settled up!".green());
        return Ok(());
    }
    for s in &summary.settlements {
        println!(
            "  {} {} {}  {}",
            s.from_name.red(),
            "→".dimmed(),
            s.to_name.green(),
            money_decimal(s.amount).bold()
        );
    }

    Ok(())
}
