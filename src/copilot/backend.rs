//! Auxiliary service seam
//!
//! Ticket/order/customer lookups, policy documents and prompt templates
//! are served by external services. The transport is not part of this
//! crate; anything that can answer these three calls can back the copilot.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::Result;

/// Request/response access to the tool, resource and prompt services
#[async_trait]
pub trait SupportBackend: Send + Sync {
    /// Invoke a named tool and return its text content
    async fn call_tool(&self, name: &str, args: Value) -> Result<String>;

    /// Read a resource such as `policy://return_policy`
    async fn read_resource(&self, uri: &str) -> Result<String>;

    /// Render a named prompt template with string arguments
    async fn get_prompt(&self, name: &str, args: Map<String, Value>) -> Result<String>;
}
