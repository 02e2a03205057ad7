//! Support Copilot
//!
//! A customer support copilot built around a session-scoped conversation
//! memory that links ticket, order and customer references across turns.
//!
//! # Architecture
//!
//! - **memory**: entity extraction, ordered reference sets, context summary
//! - **copilot**: tool wrappers, policy/situation helpers, system prompt
//! - **repl** / **cli**: interactive terminal front end

pub mod errors;
pub mod memory;
pub mod copilot;

pub use errors::{CopilotError, Result};
pub use memory::{ConversationMemory, EntityKind, SharedMemory};
pub use copilot::Copilot;

// Terminal front end
pub mod cli;
pub mod config;
pub mod repl;
pub mod telemetry;
