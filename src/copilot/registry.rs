//! Tool registry with JSON schemas
//!
//! Describes the copilot tools to the external agent so it can choose
//! one and fill in arguments.
//!
//! Tools:
//! - get_ticket_status, get_order_info, get_customer_details: lookups
//! - get_policy, explain_policy: raw and personalised policy text
//! - initiate_return, escalate_ticket: actions
//! - generate_response, smart_greeting, get_support_prompt: prompt-backed replies

use serde::Serialize;
use serde_json::{json, Value};

/// Tool description handed to the agent
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDescriptor {
    fn new(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    /// Required argument names from the schema
    pub fn required_args(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|req| req.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Ordered registry of copilot tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

fn string_arg(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn string_arg_with_default(description: &str, default: &str) -> Value {
    json!({ "type": "string", "description": description, "default": default })
}

impl ToolRegistry {
    /// Registry with every copilot tool
    pub fn new() -> Self {
        let tools = vec![
            ToolDescriptor::new(
                "get_ticket_status",
                "Get status and details of a support ticket by ID",
                json!({
                    "type": "object",
                    "properties": { "ticket_id": string_arg("The ticket ID to look up") },
                    "required": ["ticket_id"]
                }),
            ),
            ToolDescriptor::new(
                "get_order_info",
                "Get order information including items, status, and total",
                json!({
                    "type": "object",
                    "properties": { "order_id": string_arg("The order ID to look up") },
                    "required": ["order_id"]
                }),
            ),
            ToolDescriptor::new(
                "get_customer_details",
                "Get customer information including name, email, tier, and order history",
                json!({
                    "type": "object",
                    "properties": { "customer_id": string_arg("The customer ID to look up") },
                    "required": ["customer_id"]
                }),
            ),
            ToolDescriptor::new(
                "get_policy",
                "Get company policy documents. Use: shipping_policy, return_policy, refund_policy, warranty_policy, or list_all",
                json!({
                    "type": "object",
                    "properties": { "policy_type": string_arg("Policy type or alias (shipping, returns, list, ...)") },
                    "required": ["policy_type"]
                }),
            ),
            ToolDescriptor::new(
                "explain_policy",
                "Get user-friendly policy explanation customized to customer's situation. Use for shipping, return, refund, or warranty policies.",
                json!({
                    "type": "object",
                    "properties": {
                        "policy_type": string_arg("Policy type: shipping, return, refund, warranty"),
                        "context_type": string_arg_with_default("Context: general, order_specific, ticket_specific", "general"),
                        "customer_situation": string_arg_with_default("Customer's current situation for personalized response", "")
                    },
                    "required": ["policy_type"]
                }),
            ),
            ToolDescriptor::new(
                "initiate_return",
                "Initiate a return process for a ticket or order",
                json!({
                    "type": "object",
                    "properties": {
                        "reference_id": string_arg("Ticket or order ID to process return for"),
                        "reason": string_arg_with_default("Reason for return", "Customer request")
                    },
                    "required": ["reference_id"]
                }),
            ),
            ToolDescriptor::new(
                "escalate_ticket",
                "Escalate a ticket to higher priority or different department",
                json!({
                    "type": "object",
                    "properties": {
                        "ticket_id": string_arg("Ticket ID to escalate"),
                        "department": string_arg("Department to escalate to"),
                        "notes": string_arg_with_default("Additional notes for escalation", "")
                    },
                    "required": ["ticket_id", "department"]
                }),
            ),
            ToolDescriptor::new(
                "generate_response",
                "Generate contextual response using remembered customer/order context",
                json!({
                    "type": "object",
                    "properties": {
                        "query": string_arg("Customer query to respond to"),
                        "tone": string_arg_with_default("Response tone", "friendly")
                    },
                    "required": ["query"]
                }),
            ),
            ToolDescriptor::new(
                "smart_greeting",
                "Generate personalized greeting based on customer context",
                json!({
                    "type": "object",
                    "properties": {
                        "issue_type": string_arg_with_default("Type of issue customer has", "")
                    },
                    "required": []
                }),
            ),
            ToolDescriptor::new(
                "get_support_prompt",
                "Get support prompt templates for various scenarios",
                json!({
                    "type": "object",
                    "properties": {
                        "prompt_name": string_arg("Name of the prompt template"),
                        "customer_name": string_arg_with_default("Customer name", ""),
                        "issue_description": string_arg_with_default("Description of the issue", ""),
                        "customer_tier": string_arg_with_default("Customer tier", "standard"),
                        "urgency_level": string_arg_with_default("Urgency level", "medium")
                    },
                    "required": ["prompt_name"]
                }),
            ),
        ];

        Self { tools }
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_tools() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 10);
        for name in [
            "get_ticket_status",
            "get_order_info",
            "get_customer_details",
            "get_policy",
            "explain_policy",
            "initiate_return",
            "escalate_ticket",
            "generate_response",
            "smart_greeting",
            "get_support_prompt",
        ] {
            assert!(registry.contains(name), "missing tool {}", name);
        }
    }

    #[test]
    fn test_required_args() {
        let registry = ToolRegistry::new();
        let escalate = registry.get("escalate_ticket").unwrap();
        assert_eq!(escalate.required_args(), ["ticket_id", "department"]);

        let greeting = registry.get("smart_greeting").unwrap();
        assert!(greeting.required_args().is_empty());

        let template = registry.get("get_support_prompt").unwrap();
        assert_eq!(template.required_args(), ["prompt_name"]);
        assert_eq!(template.parameters["properties"]["urgency_level"]["default"], "medium");
    }

    #[test]
    fn test_schemas_are_objects() {
        let registry = ToolRegistry::new();
        for tool in registry.descriptors() {
            assert_eq!(tool.parameters["type"], "object", "{} schema", tool.name);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::new();
        assert!(registry.get("delete_customer").is_none());
    }
}
