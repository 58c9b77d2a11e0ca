//! Net balance domain model

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Net position of every known person
///
/// Positive means the group owes the person money, negative means the person
/// owes the group. Entries keep their insertion order, which is the order the
/// settlement walk uses to break ties between equal amounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Balances {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Balances {
    /// Create an empty balance table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with a zero entry for each id
    pub fn zeroed<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        ids.into_iter().map(|id| (id, 0.0)).collect()
    }

    /// Set a person's balance, adding the entry if it is new
    pub fn insert(&mut self, id: impl Into<String>, balance: f64) {
        let id = id.into();
        match self.index.get(&id) {
            Some(&pos) => self.entries[pos].1 = balance,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, balance));
            }
        }
    }

    /// Add `delta` to a known person's balance
    ///
    /// Returns false and leaves the table untouched when the id is unknown.
    pub fn adjust(&mut self, id: &str, delta: f64) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.entries[pos].1 += delta;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(id, balance)| (id.as_str(), *balance))
    }

    /// Sum of all balances (zero up to float noise for a consistent group)
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, balance)| balance).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut balances = Balances::new();
        for (id, balance) in iter {
            balances.insert(id, balance);
        }
        balances
    }
}

impl Serialize for Balances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, balance) in &self.entries {
            map.serialize_entry(id, balance)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_keeps_order() {
        let balances = Balances::zeroed(["c", "a", "b"]);
        let ids: Vec<&str> = balances.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(balances.total(), 0.0);
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut balances = Balances::zeroed(["a"]);
        assert!(balances.adjust("a", 5.0));
        assert!(!balances.adjust("ghost", 5.0));
        assert_eq!(balances.len(), 1);
        assert_eq!(balances.get("a"), Some(5.0));
        assert!(!balances.contains("ghost"));
    }

    #[test]
    fn test_insert_overwrites_existing_entry() {
        let mut balances: Balances = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        balances.insert("a", 3.0);
        assert_eq!(balances.len(), 2);
        assert_eq!(balances.get("a"), Some(3.0));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let balances: Balances = [("b", -10.0), ("a", 10.0)].into_iter().collect();
        let json = serde_json::to_string(&balances).unwrap();
        assert_eq!(json, r#"{"b":-10.0,"a":10.0}"#);
    }
}
