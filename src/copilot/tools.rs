//! Memory-aware wrappers around the support backend
//!
//! Every wrapper records the ids it was asked about, runs the backend
//! call, and scans the response for further references. Backend failures
//! come back as descriptive text so the agent can still reply.

use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::backend::SupportBackend;
use super::policy;
use super::situation::{self, GreetingDetails};
use crate::memory::{ContextSlot, EntityKind, SharedMemory};

/// Default return reason when none is given
pub const DEFAULT_RETURN_REASON: &str = "Customer request";

/// Default tone for prompt-backed replies
pub const DEFAULT_TONE: &str = "friendly";

/// Urgency assumed for support prompt templates
pub const DEFAULT_URGENCY: &str = "medium";

/// Tool surface exposed to the agent
#[derive(Clone)]
pub struct SupportTools {
    backend: Arc<dyn SupportBackend>,
    memory: SharedMemory,
}

impl SupportTools {
    pub fn new(backend: Arc<dyn SupportBackend>, memory: SharedMemory) -> Self {
        Self { backend, memory }
    }

    /// Session memory these tools write to
    pub fn memory(&self) -> &SharedMemory {
        &self.memory
    }

    /// Look up a ticket and remember it
    pub async fn get_ticket_status(&self, ticket_id: &str) -> String {
        self.memory.record(EntityKind::Ticket, ticket_id);
        let result = self
            .call_tool("get_ticket_status", json!({ "ticket_id": ticket_id }))
            .await;
        self.memory.extract_entities(&result);
        self.memory.set_context(ContextSlot::Ticket, result.clone());
        result
    }

    /// Look up an order and remember it
    pub async fn get_order_info(&self, order_id: &str) -> String {
        self.memory.record(EntityKind::Order, order_id);
        let result = self
            .call_tool("get_order_info", json!({ "order_id": order_id }))
            .await;
        self.memory.extract_entities(&result);
        self.memory.set_context(ContextSlot::Order, result.clone());
        result
    }

    /// Look up a customer and remember them
    pub async fn get_customer_details(&self, customer_id: &str) -> String {
        self.memory.record(EntityKind::Customer, customer_id);
        let result = self
            .call_tool("get_customer_details", json!({ "customer_id": customer_id }))
            .await;
        self.memory.extract_entities(&result);
        self.memory.set_context(ContextSlot::Customer, result.clone());
        result
    }

    /// Start a return for a ticket or order
    pub async fn initiate_return(&self, reference_id: &str, reason: &str) -> String {
        let result = self
            .call_tool(
                "initiate_return",
                json!({ "reference_id": reference_id, "reason": reason }),
            )
            .await;
        self.memory.extract_entities(&result);
        result
    }

    /// Hand a ticket to another department
    pub async fn escalate_ticket(&self, ticket_id: &str, department: &str, notes: &str) -> String {
        self.memory.record(EntityKind::Ticket, ticket_id);
        let result = self
            .call_tool(
                "escalate_ticket",
                json!({ "ticket_id": ticket_id, "department": department, "notes": notes }),
            )
            .await;
        self.memory.extract_entities(&result);
        result
    }

    /// Raw policy document
    pub async fn get_policy(&self, policy_type: &str) -> String {
        self.read_resource(&policy::policy_uri(policy_type)).await
    }

    /// Personalised, brief policy explanation
    ///
    /// `context_type` is accepted for the agent's benefit but does not
    /// change the request.
    pub async fn explain_policy(
        &self,
        policy_type: &str,
        context_type: &str,
        customer_situation: &str,
    ) -> String {
        let raw_policy = self.get_policy(policy_type).await;
        if policy::is_missing_policy(&raw_policy) {
            return format!("Sorry, I couldn't find the {} policy.", policy_type);
        }

        let (ctx, recent_order) = self.memory.with(|memory| {
            (
                memory.context().clone(),
                memory.most_recent(EntityKind::Order).map(str::to_string),
            )
        });
        let situation = situation::customer_situation(
            customer_situation,
            ctx.last_customer.as_deref(),
            ctx.last_order.as_deref(),
            recent_order.as_deref(),
        );
        tracing::debug!(policy = policy_type, context_type, %situation, "explaining policy");

        let mut args = Map::new();
        args.insert("policy_content".into(), Value::String(raw_policy));
        args.insert("customer_situation".into(), Value::String(situation));
        args.insert("tone".into(), Value::String(DEFAULT_TONE.to_string()));
        self.get_prompt("policy_explanation", args).await
    }

    /// Reply grounded in the last customer and order payloads
    pub async fn generate_response(&self, query: &str, tone: &str) -> String {
        let ctx = self.memory.context();

        let mut args = Map::new();
        args.insert("query".into(), Value::String(query.to_string()));
        args.insert(
            "customer_data".into(),
            Value::String(ctx.last_customer.unwrap_or_default()),
        );
        args.insert(
            "order_data".into(),
            Value::String(ctx.last_order.unwrap_or_default()),
        );
        args.insert("tone".into(), Value::String(tone.to_string()));
        self.get_prompt("contextual_response", args).await
    }

    /// Greeting personalised with the most recent customer
    pub async fn smart_greeting(&self, issue_type: &str) -> String {
        let GreetingDetails {
            customer_name,
            customer_tier,
            recent_activity,
        } = self.memory.with(|memory| {
            situation::greeting_details(
                memory.most_recent(EntityKind::CustomerName),
                memory.context().last_customer.as_deref(),
            )
        });

        let mut args = Map::new();
        args.insert("customer_name".into(), Value::String(customer_name));
        args.insert("customer_tier".into(), Value::String(customer_tier));
        args.insert("recent_activity".into(), Value::String(recent_activity));
        args.insert("issue_type".into(), Value::String(issue_type.to_string()));
        self.get_prompt("smart_greeting", args).await
    }

    /// Render a named support prompt template
    pub async fn get_support_prompt(
        &self,
        prompt_name: &str,
        customer_name: &str,
        issue_description: &str,
        customer_tier: &str,
        urgency_level: &str,
    ) -> String {
        let mut args = Map::new();
        args.insert("customer_name".into(), Value::String(customer_name.to_string()));
        args.insert(
            "issue_description".into(),
            Value::String(issue_description.to_string()),
        );
        args.insert("customer_tier".into(), Value::String(customer_tier.to_string()));
        args.insert("urgency_level".into(), Value::String(urgency_level.to_string()));
        self.get_prompt(prompt_name, args).await
    }

    /// Route an agent tool call by name
    ///
    /// Missing required arguments and unknown tools are reported as text.
    pub async fn dispatch(&self, name: &str, args: &Value) -> String {
        let arg = |key: &str| args.get(key).and_then(Value::as_str);
        let arg_or = |key: &str, default: &'static str| arg(key).unwrap_or(default).to_string();

        macro_rules! required {
            ($key:literal) => {
                match arg($key) {
                    Some(value) => value,
                    None => return format!("Missing required argument '{}' for tool {}", $key, name),
                }
            };
        }

        match name {
            "get_ticket_status" => self.get_ticket_status(required!("ticket_id")).await,
            "get_order_info" => self.get_order_info(required!("order_id")).await,
            "get_customer_details" => self.get_customer_details(required!("customer_id")).await,
            "get_policy" => self.get_policy(required!("policy_type")).await,
            "explain_policy" => {
                let policy_type = required!("policy_type");
                self.explain_policy(
                    policy_type,
                    &arg_or("context_type", "general"),
                    &arg_or("customer_situation", ""),
                )
                .await
            }
            "initiate_return" => {
                let reference_id = required!("reference_id");
                self.initiate_return(reference_id, &arg_or("reason", DEFAULT_RETURN_REASON))
                    .await
            }
            "escalate_ticket" => {
                let ticket_id = required!("ticket_id");
                let department = required!("department");
                self.escalate_ticket(ticket_id, department, &arg_or("notes", ""))
                    .await
            }
            "generate_response" => {
                let query = required!("query");
                self.generate_response(query, &arg_or("tone", DEFAULT_TONE)).await
            }
            "smart_greeting" => self.smart_greeting(&arg_or("issue_type", "")).await,
            "get_support_prompt" => {
                let prompt_name = required!("prompt_name");
                self.get_support_prompt(
                    prompt_name,
                    &arg_or("customer_name", ""),
                    &arg_or("issue_description", ""),
                    &arg_or("customer_tier", situation::DEFAULT_TIER),
                    &arg_or("urgency_level", DEFAULT_URGENCY),
                )
                .await
            }
            other => format!("Unknown tool: {}", other),
        }
    }

    async fn call_tool(&self, name: &str, args: Value) -> String {
        match self.backend.call_tool(name, args).await {
            Ok(text) if text.is_empty() => format!("No response from tool {}", name),
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(tool = name, error = %err, "tool call failed");
                format!("Error calling tool {}: {}", name, err)
            }
        }
    }

    async fn read_resource(&self, uri: &str) -> String {
        match self.backend.read_resource(uri).await {
            Ok(text) if text.trim().is_empty() => format!("No content found for resource: {}", uri),
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                tracing::warn!(uri, error = %err, "resource read failed");
                format!("Error reading resource {}: {}", uri, err)
            }
        }
    }

    async fn get_prompt(&self, name: &str, args: Map<String, Value>) -> String {
        match self.backend.get_prompt(name, args).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                tracing::warn!(prompt = name, error = %err, "prompt request failed");
                format!("Error getting prompt {}: {}", name, err)
            }
        }
    }
}
