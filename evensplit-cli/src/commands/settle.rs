//! Settle command - simplified payments

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use evensplit_core::domain::name_of;

use super::{get_context, load_group, wants_json};
use crate::output::{create_table, money_decimal};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let group = load_group(file)?;
    let settlements = ctx.settlement_service.settlements(&group)?;

    if wants_json(json, &ctx) {
        println!("{}", serde_json::to_string_pretty(&settlements)?);
        return Ok(());
    }

    if settlements.is_empty() {
        println!("{}", "All settled up!".green());
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["From", "To", "Amount"]);
    for s in &settlements {
        table.add_row(vec![
            name_of(&group.people, &s.from).to_string(),
            name_of(&group.people, &s.to).to_string(),
            money_decimal(s.amount),
        ]);
    }

    println!("{}", table);
    println!();
    println!("{} payment(s) settle all debts", settlements.len());
    Ok(())
}
