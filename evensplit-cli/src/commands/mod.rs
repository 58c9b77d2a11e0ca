//! CLI command implementations

pub mod balances;
pub mod check;
pub mod config;
pub mod debts;
pub mod settle;
pub mod summary;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use evensplit_core::adapters::json::JsonGroupSource;
use evensplit_core::config::OutputFormat;
use evensplit_core::ports::GroupSource;
use evensplit_core::{EvenSplitContext, Group};
use tracing::debug;

/// Get the evensplit directory from environment or default
pub fn get_evensplit_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("EVENSPLIT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".evensplit"))
        .context("Could not find home directory, set EVENSPLIT_DIR")
}

/// Get the evensplit context (settings and services)
pub fn get_context() -> Result<EvenSplitContext> {
    let dir = get_evensplit_dir()?;
    debug!(dir = %dir.display(), "loading context");
    EvenSplitContext::new(&dir).context("Failed to initialize evensplit context")
}

/// Load the group document from a file, or from stdin when piped
pub fn load_group(file: Option<&Path>) -> Result<Group> {
    let source = if let Some(path) = file {
        JsonGroupSource::from_path(path)
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read group document from stdin")?;
        JsonGroupSource::from_string(buffer, "stdin")
    } else {
        anyhow::bail!("No group document provided. Pass a file or pipe JSON to stdin.");
    };

    source
        .load()
        .with_context(|| format!("Failed to load group from {}", source.describe()))
}

/// True if output should be JSON, from the flag or the configured default
pub fn wants_json(flag: bool, ctx: &EvenSplitContext) -> bool {
    flag || ctx.config.default_format == OutputFormat::Json
}
