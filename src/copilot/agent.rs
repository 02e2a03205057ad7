//! Reactive agent seam
//!
//! The planning loop and model call live outside the crate. The copilot
//! only hands over the system prompt and the user's message.

use async_trait::async_trait;

use crate::errors::Result;

/// External conversational agent
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Produce the assistant reply for one turn
    async fn respond(&self, system_prompt: &str, user_input: &str) -> Result<String>;
}
