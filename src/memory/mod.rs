//! Conversation memory and entity linking
//!
//! Components:
//! - Entities: ordered, duplicate-free reference collections
//! - Extraction: regex patterns for tickets, orders, customers, names
//! - Conversation: per-session memory with summary rendering
//! - Context: last raw payload per lookup category
//! - Shared: mutex-guarded handle for a session

pub mod context;
pub mod conversation;
pub mod entities;
pub mod extraction;
pub mod shared;

pub use context::{ContextSlot, CurrentContext};
pub use conversation::{ConversationMemory, MemorySnapshot, NO_CONTEXT};
pub use entities::{EntityKind, EntityList};
pub use extraction::{extract, ExtractedEntities};
pub use shared::SharedMemory;
