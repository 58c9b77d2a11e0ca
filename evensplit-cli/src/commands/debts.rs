//! Debts command - pairwise debts before simplification

use std::path::Path;

use anyhow::Result;
use evensplit_core::domain::name_of;

use super::{get_context, load_group, wants_json};
use crate::output::{create_table, money};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let group = load_group(file)?;
    let debts = ctx.settlement_service.direct_debts(&group)?;
    let simplified = ctx.settlement_service.settlements(&group)?;

    if wants_json(json, &ctx) {
        println!("{}", serde_json::to_string_pretty(&debts)?);
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["Owes", "To", "Amount"]);
    for debt in debts.iter() {
        table.add_row(vec![
            name_of(&group.people, &debt.from).to_string(),
            name_of(&group.people, &debt.to).to_string(),
            money(debt.amount),
        ]);
    }

    println!("{}", table);
    println!();
    println!(
        "{} direct debt(s), {} payment(s) after simplification",
        debts.len(),
        simplified.len()
    );
    Ok(())
}
