//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON documents (file or in-memory) for the GroupSource port

pub mod json;
