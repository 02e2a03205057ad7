//! Customer support copilot
//!
//! Wires a session's [`SharedMemory`] to the external agent and support
//! services:
//! - Backend: tool, resource and prompt calls (external)
//! - Agent: reactive planning loop and model (external)
//! - Tools: wrappers that record entity references on every call
//! - Prompt: system prompt carrying the memory summary

pub mod agent;
pub mod backend;
pub mod policy;
pub mod prompt;
pub mod registry;
pub mod situation;
pub mod tools;

pub use agent::ChatAgent;
pub use backend::SupportBackend;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use tools::SupportTools;

use std::sync::Arc;

use crate::memory::SharedMemory;

/// One conversation's copilot
pub struct Copilot {
    memory: SharedMemory,
    tools: SupportTools,
    agent: Arc<dyn ChatAgent>,
    registry: ToolRegistry,
    summary_window: Option<usize>,
}

impl Copilot {
    /// Create a copilot with a fresh session memory
    pub fn new(backend: Arc<dyn SupportBackend>, agent: Arc<dyn ChatAgent>) -> Self {
        Self::with_memory(backend, agent, SharedMemory::new())
    }

    /// Create a copilot over an existing session memory
    pub fn with_memory(
        backend: Arc<dyn SupportBackend>,
        agent: Arc<dyn ChatAgent>,
        memory: SharedMemory,
    ) -> Self {
        Self {
            tools: SupportTools::new(backend, memory.clone()),
            memory,
            agent,
            registry: ToolRegistry::new(),
            summary_window: None,
        }
    }

    /// Limit each summary category to its most recent `window` entries
    pub fn with_summary_window(mut self, window: Option<usize>) -> Self {
        self.summary_window = window;
        self
    }

    /// System prompt for the next turn
    pub fn system_prompt(&self) -> String {
        prompt::build_system_prompt(&self.memory.summary_with_window(self.summary_window))
    }

    /// Run one conversational turn
    ///
    /// References in the user's input are recorded before the prompt is
    /// built, and references in the reply afterwards. Agent failures are
    /// returned as an apology rather than an error.
    pub async fn process_query(&self, user_input: &str) -> String {
        self.memory.extract_entities(user_input);
        let system_prompt = self.system_prompt();

        match self.agent.respond(&system_prompt, user_input).await {
            Ok(response) => {
                self.memory.extract_entities(&response);
                response
            }
            Err(err) => {
                tracing::warn!(error = %err, "agent turn failed");
                format!("Sorry, I encountered an error: {}", err)
            }
        }
    }

    pub fn memory(&self) -> &SharedMemory {
        &self.memory
    }

    pub fn tools(&self) -> &SupportTools {
        &self.tools
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}
