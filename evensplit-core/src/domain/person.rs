//! Person domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the group sharing expenses
///
/// The id is the only field the balance and settlement calculations read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

impl Person {
    /// Create a person with a freshly minted id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Create a person with a known id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Look up a display name, falling back to "Unknown" for stale ids
pub fn name_of<'a>(people: &'a [Person], id: &str) -> &'a str {
    people
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or("Unknown")
}
