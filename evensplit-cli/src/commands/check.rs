//! Check command - validate a group document

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use evensplit_core::services::{audit_group, AuditIssue};
use evensplit_core::OperationResult;

use super::{get_context, load_group, wants_json};
use crate::output::{create_table, success, warning};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let group = load_group(file)?;
    let issues = audit_group(&group);

    if wants_json(json, &ctx) {
        let result: OperationResult<Vec<AuditIssue>> = if issues.is_empty() {
            OperationResult::ok(issues)
        } else {
            let context = HashMap::from([(
                "issues".to_string(),
                serde_json::to_value(&issues)?,
            )]);
            OperationResult::fail_with_context(
                format!("{} problem(s) found", issues.len()),
                context,
            )
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            anyhow::bail!("Group document has problems");
        }
        return Ok(());
    }

    if issues.is_empty() {
        success(&format!(
            "No problems found ({} people, {} expenses)",
            group.people.len(),
            group.expenses.len()
        ));
        return Ok(());
    }

    warning(&format!("{} problem(s) found", issues.len()));
    let mut table = create_table();
    table.set_header(vec!["Subject", "Problem"]);
    for issue in &issues {
        table.add_row(vec![issue.subject.clone(), issue.message.clone()]);
    }
    println!("{}", table);

    anyhow::bail!("Group document has problems")
}
