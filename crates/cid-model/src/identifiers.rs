use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notice::Notice;

/// Ordered, duplicate-free list of cleaned identifiers.
///
/// Insertion order is first-seen order; re-inserting a value is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    values: Vec<String>,
    seen: BTreeSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` unless it is already present. Returns true when added.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.values.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<String> {
        self.values
    }
}

impl<S: Into<String>> FromIterator<S> for ResultSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values.join(","))
    }
}

impl Serialize for ResultSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.values)
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

/// Counters collected while normalizing one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    /// Non-absent cells (or 1 for a text blob) that were scanned.
    pub cells: usize,
    /// Tokens produced by splitting, before coercion.
    pub tokens: usize,
    /// Empty or `nan` placeholders thrown away.
    pub discarded: usize,
    /// Tokens that repeated an identifier already in the result.
    pub duplicates: usize,
}

/// Outcome of one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub ids: ResultSet,
    pub notices: Vec<Notice>,
    pub stats: TokenStats,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_seen_order() {
        let mut set = ResultSet::new();
        assert!(set.insert("30"));
        assert!(set.insert("10"));
        assert!(!set.insert("30"));
        assert!(set.insert("20"));

        assert_eq!(set.as_slice(), ["30", "10", "20"]);
        assert!(set.contains("10"));
        assert!(!set.contains("40"));
    }

    #[test]
    fn collect_drops_duplicates() {
        let set: ResultSet = ["1", "2", "1", "3", "2"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "1,2,3");
    }

    #[test]
    fn deserialize_dedupes() {
        let set: ResultSet = serde_json::from_str(r#"["5","5","6"]"#).unwrap();
        assert_eq!(set.into_vec(), vec!["5".to_string(), "6".to_string()]);
    }
}
