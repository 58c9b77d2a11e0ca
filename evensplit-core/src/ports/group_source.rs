//! Group source port
//!
//! Defines where a group snapshot comes from. The calculations never load
//! anything themselves; the caller picks a source and hands over the result.

use crate::domain::result::Result;
use crate::domain::Group;

/// Supplier of group snapshots
pub trait GroupSource: Send + Sync {
    /// Human readable origin, used in messages (e.g. a file path or "stdin")
    fn describe(&self) -> String;

    /// Load a fresh snapshot
    fn load(&self) -> Result<Group>;
}
