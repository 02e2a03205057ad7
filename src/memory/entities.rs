//! Entity reference collections
//!
//! An [`EntityList`] is an insertion-ordered set of strings: re-adding an
//! existing entry is a no-op and nothing is ever removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of entity reference tracked by the conversation memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Numeric support ticket identifier (3-4 digits)
    Ticket,
    /// Order code, `ORD` followed by digits
    Order,
    /// Lower-case `word_word` customer identifier
    Customer,
    /// Quoted two-word customer display name
    CustomerName,
}

impl EntityKind {
    /// All kinds in summary rendering order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Ticket,
        EntityKind::Order,
        EntityKind::Customer,
        EntityKind::CustomerName,
    ];

    /// Label used in the context summary
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Ticket => "Known tickets",
            EntityKind::Order => "Known orders",
            EntityKind::Customer => "Known customers",
            EntityKind::CustomerName => "Customer names",
        }
    }

    /// Short name for display and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Ticket => "ticket",
            EntityKind::Order => "order",
            EntityKind::Customer => "customer",
            EntityKind::CustomerName => "customer_name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered, duplicate-free list of entity references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityList {
    items: Vec<String>,
}

impl EntityList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` unless it is already present
    ///
    /// Returns true if the value was newly inserted.
    ///
    /// # Complexity
    /// O(n) membership scan; lists stay small for a single conversation
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.items.push(value.to_string());
        true
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Most recently inserted entry
    pub fn last(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    /// Up to `n` most recent entries, oldest first
    pub fn last_n(&self, n: usize) -> &[String] {
        let start = self.items.len().saturating_sub(n);
        &self.items[start..]
    }

    /// All entries in first-seen order
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut list = EntityList::new();
        assert!(list.insert("123"));
        assert!(!list.insert("123"));
        assert_eq!(list.as_slice(), ["123"]);
    }

    #[test]
    fn test_first_seen_order() {
        let mut list = EntityList::new();
        for value in ["a", "b", "a", "c"] {
            list.insert(value);
        }
        assert_eq!(list.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut list = EntityList::new();
        list.insert("ORD001");
        assert!(list.contains("ORD001"));
        assert!(!list.contains("ord001"));
        assert!(list.insert("ord001"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_last_and_last_n() {
        let mut list = EntityList::new();
        assert!(list.last().is_none());
        assert!(list.last_n(3).is_empty());

        for value in ["1", "2", "3", "4"] {
            list.insert(value);
        }
        assert_eq!(list.last(), Some("4"));
        assert_eq!(list.last_n(3), ["2", "3", "4"]);
        assert_eq!(list.last_n(10).len(), 4);
    }

    #[test]
    fn test_kind_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            EntityKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut list = EntityList::new();
        list.insert("john_doe");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["john_doe"]"#);
    }
}
