//! Interactive session state
//!
//! One session owns one conversation memory for its whole lifetime; a new
//! session starts from an empty memory.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::copilot::prompt;
use crate::memory::{EntityKind, ExtractedEntities, SharedMemory};

/// Conversation session driven by the REPL
#[derive(Debug, Clone)]
pub struct CopilotSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    memory: SharedMemory,
    turns: usize,
    summary_window: Option<usize>,
}

impl CopilotSession {
    /// Start a session with an empty memory
    pub fn new(summary_window: Option<usize>) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            memory: SharedMemory::new(),
            turns: 0,
            summary_window,
        };
        tracing::info!(session = %session.id, "session started");
        session
    }

    /// Feed one line of conversation text through extraction
    ///
    /// Returns the references that were new to this session.
    pub fn ingest(&mut self, text: &str) -> ExtractedEntities {
        self.turns += 1;
        self.memory.extract_entities(text)
    }

    /// Context summary as it would appear in the prompt
    pub fn summary(&self) -> String {
        self.memory.summary_with_window(self.summary_window)
    }

    /// Full system prompt for the next turn
    pub fn system_prompt(&self) -> String {
        prompt::build_system_prompt(&self.summary())
    }

    /// Entries per kind, in first-seen order
    pub fn entities(&self, kind: EntityKind) -> Vec<String> {
        self.memory.with(|memory| memory.entities(kind).as_slice().to_vec())
    }

    /// Reference shown in the prompt: latest ticket, else order, else customer
    pub fn focus(&self) -> Option<String> {
        [EntityKind::Ticket, EntityKind::Order, EntityKind::Customer]
            .into_iter()
            .find_map(|kind| self.memory.most_recent(kind))
    }

    pub fn memory(&self) -> &SharedMemory {
        &self.memory
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Session duration in whole seconds
    pub fn duration_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for CopilotSession {
    fn default() -> Self {
        Self::new(None)
    }
}
