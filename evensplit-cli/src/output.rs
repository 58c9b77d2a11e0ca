//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use evensplit_core::services::Standing;
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an unsigned amount with two decimals
pub fn money(amount: f64) -> String {
    format!("${:.2}", amount.abs())
}

/// Format a settlement amount with two decimals
pub fn money_decimal(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Format a balance with an explicit sign
pub fn signed_money(balance: f64) -> String {
    if balance < 0.0 {
        format!("-{}", money(balance))
    } else {
        format!("+{}", money(balance))
    }
}

/// Format a net balance, showing settled ones as a plain zero
pub fn balance_money(balance: f64) -> String {
    match Standing::of(balance) {
        Standing::Settled => money(0.0),
        Standing::IsOwed | Standing::Owes => signed_money(balance),
    }
}
