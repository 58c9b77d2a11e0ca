//! Configuration management
//!
//! Settings live in `settings.json` inside the evensplit directory:
//! ```json
//! {
//!   "strictReferences": false,
//!   "defaultFormat": "table"
//! }
//! ```
//! Keys this crate does not manage are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    strict_references: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_format: Option<OutputFormat>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// How the CLI renders results when no flag says otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format: {} (expected table or json)", other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

/// EvenSplit configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Fail on expenses that reference unknown people instead of skipping them
    pub strict_references: bool,
    pub default_format: OutputFormat,
}

impl Config {
    /// Load config from the evensplit directory
    ///
    /// Strict mode can be enabled via:
    /// 1. Settings file (es config strict on)
    /// 2. Environment variable EVENSPLIT_STRICT
    pub fn load(dir: &Path) -> Result<Self> {
        let strict_env = std::env::var("EVENSPLIT_STRICT").ok();
        Self::load_with_strict_env(dir, strict_env.as_deref())
    }

    /// Load with the value of EVENSPLIT_STRICT passed in rather than read
    fn load_with_strict_env(dir: &Path, strict_env: Option<&str>) -> Result<Self> {
        let settings_path = dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let strict_references = match strict_env {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.strict_references,
        };

        Ok(Self {
            strict_references,
            default_format: raw.default_format.unwrap_or_default(),
        })
    }

    /// Save config to the evensplit directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        let settings_path = dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.strict_references = self.strict_references;
        settings.default_format = Some(self.default_format);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
