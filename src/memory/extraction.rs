//! Pattern-based entity extraction
//!
//! Four independent patterns are run over arbitrary text:
//! - ticket: `\b\d{3,4}\b`
//! - order: `\bORD\d+\b`, case-insensitive, kept as matched
//! - customer id: `\b[a-z]+_[a-z]+\b`, case-insensitive, lower-cased
//! - customer name: `"First Last"`, captured without the quotes
//!
//! The ticket pattern matches any standalone 3-4 digit number (street
//! numbers, amounts, years). Digits inside a longer run are not matched
//! because the word boundary fails.

use once_cell::sync::Lazy;
use regex::Regex;

use super::entities::EntityKind;

static TICKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3,4}\b").expect("Invalid ticket regex"));

static ORDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bORD\d+\b").expect("Invalid order regex"));

static CUSTOMER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z]+_[a-z]+\b").expect("Invalid customer id regex"));

static CUSTOMER_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([A-Z][a-z]+ [A-Z][a-z]+)""#).expect("Invalid customer name regex")
});

/// Entity references found in one piece of text, in match order
///
/// Values are already normalised (customer ids lower-cased) but not
/// deduplicated; the memory handles that on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedEntities {
    pub tickets: Vec<String>,
    pub orders: Vec<String>,
    pub customers: Vec<String>,
    pub customer_names: Vec<String>,
}

impl ExtractedEntities {
    /// Matches for a single kind
    pub fn of(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Ticket => &self.tickets,
            EntityKind::Order => &self.orders,
            EntityKind::Customer => &self.customers,
            EntityKind::CustomerName => &self.customer_names,
        }
    }

    /// Total number of matches across all kinds
    pub fn len(&self) -> usize {
        self.tickets.len() + self.orders.len() + self.customers.len() + self.customer_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan `text` for every entity pattern
pub fn extract(text: &str) -> ExtractedEntities {
    ExtractedEntities {
        tickets: TICKET_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        orders: ORDER_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        customers: CUSTOMER_ID_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect(),
        customer_names: CUSTOMER_NAME_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_digit_bounds() {
        let found = extract("12 123 1234 12345");
        assert_eq!(found.tickets, ["123", "1234"]);
    }

    #[test]
    fn test_ticket_not_matched_inside_longer_run() {
        let found = extract("zip 12345 and phone 5551234567");
        assert!(found.tickets.is_empty());
    }

    #[test]
    fn test_ticket_over_matches_standalone_numbers() {
        // Street numbers and dollar amounts are indistinguishable from tickets.
        let found = extract("123 Main St, total 299.99");
        assert_eq!(found.tickets, ["123", "299"]);
    }

    #[test]
    fn test_order_case_preserved() {
        let found = extract("orders ORD001, ord002 and Ord3");
        assert_eq!(found.orders, ["ORD001", "ord002", "Ord3"]);
    }

    #[test]
    fn test_order_requires_digits() {
        let found = extract("ORDER ORD ORDx1");
        assert!(found.orders.is_empty());
    }

    #[test]
    fn test_customer_id_lowercased() {
        let found = extract("Customer John_Doe and jane_smith");
        assert_eq!(found.customers, ["john_doe", "jane_smith"]);
    }

    #[test]
    fn test_customer_id_rejects_three_segments() {
        let found = extract("john_doe_smith");
        assert!(found.customers.is_empty());
    }

    #[test]
    fn test_customer_id_picks_up_json_keys() {
        let found = extract(r#"{"status": "in_progress", "order_id": "ORD001"}"#);
        assert_eq!(found.customers, ["in_progress", "order_id"]);
        assert_eq!(found.orders, ["ORD001"]);
    }

    #[test]
    fn test_customer_name_requires_quotes() {
        let found = extract(r#"John Doe wrote, then "Jane Smith" replied"#);
        assert_eq!(found.customer_names, ["Jane Smith"]);
    }

    #[test]
    fn test_customer_name_shape() {
        let found = extract(r#""jane smith" "JANE SMITH" "Jane  Smith" "Mary Ann Lee""#);
        assert!(found.customer_names.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let found = extract("");
        assert!(found.is_empty());
        assert_eq!(found.len(), 0);
    }

    #[test]
    fn test_of_accessor() {
        let found = extract(r#"Ticket 456 for "Bob Wilson""#);
        assert_eq!(found.of(EntityKind::Ticket), ["456"]);
        assert_eq!(found.of(EntityKind::CustomerName), ["Bob Wilson"]);
        assert!(found.of(EntityKind::Order).is_empty());
    }
}
