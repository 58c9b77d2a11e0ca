//! Balances command - net position per person

use std::path::Path;

use anyhow::Result;
use evensplit_core::domain::name_of;

use super::{get_context, load_group, wants_json};
use crate::output::{balance_money, create_table};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let group = load_group(file)?;
    let balances = ctx.settlement_service.balances(&group)?;

    if wants_json(json, &ctx) {
        println!("{}", serde_json::to_string_pretty(&balances)?);
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["ID", "Name", "Balance"]);
    for (id, balance) in balances.iter() {
        table.add_row(vec![
            id.to_string(),
            name_of(&group.people, id).to_string(),
            balance_money(balance),
        ]);
    }

    println!("{}", table);
    Ok(())
}
