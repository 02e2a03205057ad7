//! Prompt arguments derived from remembered payloads
//!
//! The last customer and order payloads are JSON documents returned by
//! the lookup tools. Anything that fails to parse falls back to neutral
//! defaults instead of surfacing an error.

use serde::Deserialize;
use serde_json::Value;

/// Situation used when nothing is known about the customer
pub const GENERAL_INQUIRY: &str = "General inquiry";

/// Tier assumed when the payload does not say
pub const DEFAULT_TIER: &str = "standard";

fn default_tier() -> String {
    DEFAULT_TIER.to_string()
}

#[derive(Debug, Deserialize)]
struct CustomerPayload {
    #[serde(default)]
    name: String,
    #[serde(default = "default_tier")]
    tier: String,
}

#[derive(Debug, Deserialize)]
struct OrderPayload {
    #[serde(default)]
    items: Vec<String>,
}

/// Describe the customer's situation for a policy explanation
///
/// An explicit, non-empty situation wins. Otherwise it is built from the
/// last customer payload, with the most recent order appended when an
/// order payload is also known.
pub fn customer_situation(
    explicit: &str,
    last_customer: Option<&str>,
    last_order: Option<&str>,
    recent_order_id: Option<&str>,
) -> String {
    if !explicit.trim().is_empty() {
        return explicit.to_string();
    }

    let Some(customer_json) = last_customer else {
        return GENERAL_INQUIRY.to_string();
    };

    match situation_from_payloads(customer_json, last_order, recent_order_id) {
        Ok(situation) if !situation.is_empty() => situation,
        Ok(_) => GENERAL_INQUIRY.to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "customer payload not usable for situation");
            GENERAL_INQUIRY.to_string()
        }
    }
}

fn situation_from_payloads(
    customer_json: &str,
    last_order: Option<&str>,
    recent_order_id: Option<&str>,
) -> serde_json::Result<String> {
    let customer: CustomerPayload = serde_json::from_str(customer_json)?;
    let mut situation = format!("Customer: {} ({} tier)", customer.name, customer.tier);

    if let Some(order_json) = last_order {
        let order: OrderPayload = serde_json::from_str(order_json)?;
        situation.push_str(&format!(
            " | Recent order {}: {}",
            recent_order_id.unwrap_or_default(),
            order.items.join(", ")
        ));
    }

    Ok(situation)
}

/// Arguments for the personalised greeting prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingDetails {
    pub customer_name: String,
    pub customer_tier: String,
    pub recent_activity: String,
}

/// Collect greeting arguments from the most recent name and customer payload
///
/// The tier is taken first, so a payload with malformed activity lists
/// still keeps it. Missing or `null` lists mean no recent activity.
pub fn greeting_details(customer_name: Option<&str>, last_customer: Option<&str>) -> GreetingDetails {
    let mut details = GreetingDetails {
        customer_name: customer_name.unwrap_or_default().to_string(),
        customer_tier: DEFAULT_TIER.to_string(),
        recent_activity: String::new(),
    };

    let Some(customer_json) = last_customer else {
        return details;
    };
    let customer: Value = match serde_json::from_str(customer_json) {
        Ok(customer) => customer,
        Err(_) => return details,
    };

    if let Some(tier) = customer.get("tier").and_then(Value::as_str) {
        details.customer_tier = tier.to_string();
    }

    let mut activity = Vec::new();
    if let Some(order_id) = latest_id(&customer, "order_details", "order_id") {
        activity.push(format!("recent order {}", order_id));
    }
    if let Some(ticket_id) = latest_id(&customer, "ticket_details", "ticket_id") {
        activity.push(format!("ticket {}", ticket_id));
    }
    details.recent_activity = activity.join(" and ");

    details
}

/// Id of the last entry in the `list` array, if the array is non-empty
fn latest_id(customer: &Value, list: &str, id_key: &str) -> Option<String> {
    let latest = customer.get(list)?.as_array()?.last()?;
    Some(match latest.get(id_key) {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = r#"{
        "name": "John Doe",
        "tier": "premium",
        "order_details": [{"order_id": "ORD001", "items": ["Widget A"]}],
        "ticket_details": [{"ticket_id": "123", "status": "in_progress"}]
    }"#;

    const ORDER: &str = r#"{"customer": "john_doe", "items": ["Widget A", "Gadget B"]}"#;

    #[test]
    fn test_explicit_situation_wins() {
        let situation = customer_situation("Waiting on a refund", Some(CUSTOMER), None, None);
        assert_eq!(situation, "Waiting on a refund");
    }

    #[test]
    fn test_no_customer_is_general() {
        assert_eq!(customer_situation("", None, Some(ORDER), None), GENERAL_INQUIRY);
    }

    #[test]
    fn test_customer_only() {
        let situation = customer_situation("", Some(CUSTOMER), None, Some("ORD001"));
        assert_eq!(situation, "Customer: John Doe (premium tier)");
    }

    #[test]
    fn test_customer_and_order() {
        let situation = customer_situation("", Some(CUSTOMER), Some(ORDER), Some("ORD001"));
        assert_eq!(
            situation,
            "Customer: John Doe (premium tier) | Recent order ORD001: Widget A, Gadget B"
        );
    }

    #[test]
    fn test_missing_tier_defaults() {
        let situation = customer_situation("", Some(r#"{"name": "Jane Smith"}"#), None, None);
        assert_eq!(situation, "Customer: Jane Smith (standard tier)");
    }

    #[test]
    fn test_unparseable_payload_is_general() {
        let situation = customer_situation("", Some("Customer nobody not found"), None, None);
        assert_eq!(situation, GENERAL_INQUIRY);

        let situation = customer_situation("", Some(CUSTOMER), Some("Order X not found"), Some("X"));
        assert_eq!(situation, GENERAL_INQUIRY);
    }

    #[test]
    fn test_greeting_without_payload() {
        let details = greeting_details(None, None);
        assert_eq!(details.customer_name, "");
        assert_eq!(details.customer_tier, DEFAULT_TIER);
        assert_eq!(details.recent_activity, "");
    }

    #[test]
    fn test_greeting_with_orders_and_tickets() {
        let details = greeting_details(Some("John Doe"), Some(CUSTOMER));
        assert_eq!(details.customer_name, "John Doe");
        assert_eq!(details.customer_tier, "premium");
        assert_eq!(details.recent_activity, "recent order ORD001 and ticket 123");
    }

    #[test]
    fn test_greeting_tickets_only() {
        let details = greeting_details(
            None,
            Some(r#"{"tier": "standard", "ticket_details": [{"ticket_id": "456"}, {"ticket_id": "789"}]}"#),
        );
        assert_eq!(details.recent_activity, "ticket 789");
    }

    #[test]
    fn test_greeting_keeps_tier_when_activity_is_odd() {
        let details = greeting_details(
            Some("John Doe"),
            Some(r#"{"tier": "premium", "order_details": [{"order_id": 1}]}"#),
        );
        assert_eq!(details.customer_tier, "premium");
        assert_eq!(details.recent_activity, "recent order 1");

        let details = greeting_details(None, Some(r#"{"tier": "gold", "order_details": null}"#));
        assert_eq!(details.customer_tier, "gold");
        assert_eq!(details.recent_activity, "");

        let details = greeting_details(
            None,
            Some(r#"{"tier": "gold", "order_details": [], "ticket_details": [{}]}"#),
        );
        assert_eq!(details.customer_tier, "gold");
        assert_eq!(details.recent_activity, "ticket ");
    }

    #[test]
    fn test_greeting_bad_payload_keeps_defaults() {
        let details = greeting_details(Some("Bob Wilson"), Some("not json"));
        assert_eq!(details.customer_name, "Bob Wilson");
        assert_eq!(details.customer_tier, DEFAULT_TIER);
    }
}
