//! Config command - show and change settings

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use evensplit_core::config::{Config, OutputFormat};

use super::get_evensplit_dir;
use crate::output::{info, success};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,
    /// Fail on expenses that reference unknown people (on/off)
    Strict {
        /// "on" or "off"
        state: String,
    },
    /// Default output format (table/json)
    Format {
        /// "table" or "json"
        format: String,
    },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let dir = get_evensplit_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create evensplit directory: {:?}", dir))?;
    let mut config = Config::load(&dir)?;

    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            info(&format!("Settings directory: {}", dir.display()));
            println!(
                "  strict references: {}",
                if config.strict_references { "on".bold() } else { "off".bold() }
            );
            println!("  default format:    {}", config.default_format.as_str().bold());
        }
        ConfigCommands::Strict { state } => {
            config.strict_references = match state.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => anyhow::bail!("Unknown state: {} (expected on or off)", other),
            };
            config.save(&dir)?;
            success(&format!(
                "Strict references {}",
                if config.strict_references { "enabled" } else { "disabled" }
            ));
        }
        ConfigCommands::Format { format } => {
            config.default_format = OutputFormat::parse(&format)?;
            config.save(&dir)?;
            success(&format!("Default format set to {}", config.default_format.as_str()));
        }
    }

    Ok(())
}
