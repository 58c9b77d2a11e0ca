//! JSON group documents
//!
//! A group document holds `people` and `expenses` in the camelCase record
//! format:
//! ```json
//! {
//!   "people": [{ "id": "1", "name": "Alice" }, { "id": "2", "name": "Bob" }],
//!   "expenses": [{
//!     "id": 1, "description": "Lunch", "amount": 30, "date": "2024-01-01",
//!     "paidBy": "1", "splitBetween": ["1", "2"], "splitType": "equal"
//!   }]
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::Group;
use crate::ports::GroupSource;

enum Origin {
    File(PathBuf),
    Inline { label: String, contents: String },
}

/// Group source reading a JSON document from a file or from memory
pub struct JsonGroupSource {
    origin: Origin,
}

impl JsonGroupSource {
    /// Read the document from a file on every load
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    /// Use an already read document, e.g. piped stdin
    pub fn from_string(contents: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline {
                label: label.into(),
                contents: contents.into(),
            },
        }
    }
}

/// Parse a group document
pub fn parse_group(contents: &str) -> Result<Group> {
    if contents.trim().is_empty() {
        return Err(Error::validation("group document is empty"));
    }
    Ok(serde_json::from_str(contents)?)
}

impl GroupSource for JsonGroupSource {
    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Inline { label, .. } => label.clone(),
        }
    }

    fn load(&self) -> Result<Group> {
        let group = match &self.origin {
            Origin::File(path) => {
                if !path.exists() {
                    return Err(Error::not_found(format!(
                        "Group file {}",
                        path.display()
                    )));
                }
                let contents = std::fs::read_to_string(path)?;
                parse_group(&contents)?
            }
            Origin::Inline { contents, .. } => parse_group(contents)?,
        };

        debug!(
            source = %self.describe(),
            people = group.people.len(),
            expenses = group.expenses.len(),
            "loaded group"
        );
        Ok(group)
    }
}
