//! Session-shared handle to a conversation memory
//!
//! One mutex guards the whole memory, so a single extraction call is
//! applied atomically even if turns overlap. The lock is never held
//! across an `.await`.

use parking_lot::Mutex;
use std::sync::Arc;

use super::context::{ContextSlot, CurrentContext};
use super::conversation::{ConversationMemory, MemorySnapshot};
use super::entities::EntityKind;
use super::extraction::{self, ExtractedEntities};

/// Cloneable, thread-safe handle to one session's memory
#[derive(Debug, Clone, Default)]
pub struct SharedMemory {
    inner: Arc<Mutex<ConversationMemory>>,
}

impl SharedMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing memory
    pub fn from_memory(memory: ConversationMemory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(memory)),
        }
    }

    /// Run `f` with shared access
    pub fn with<R>(&self, f: impl FnOnce(&ConversationMemory) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Run `f` with exclusive access
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ConversationMemory) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Extract and record all references in `text` as one batch
    ///
    /// Pattern matching runs before the lock is taken.
    pub fn extract_entities(&self, text: &str) -> ExtractedEntities {
        let found = extraction::extract(text);
        self.with_mut(|memory| memory.apply(&found))
    }

    pub fn record(&self, kind: EntityKind, value: &str) -> bool {
        self.with_mut(|memory| memory.record(kind, value))
    }

    pub fn most_recent(&self, kind: EntityKind) -> Option<String> {
        self.with(|memory| memory.most_recent(kind).map(str::to_string))
    }

    pub fn summary(&self) -> String {
        self.with(ConversationMemory::summary)
    }

    pub fn summary_with_window(&self, window: Option<usize>) -> String {
        self.with(|memory| memory.summary_with_window(window))
    }

    /// Overwrite the last payload for a lookup category
    pub fn set_context(&self, slot: ContextSlot, payload: String) {
        self.with_mut(|memory| memory.context_mut().set(slot, payload));
    }

    pub fn context(&self) -> CurrentContext {
        self.with(|memory| memory.context().clone())
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        self.with(ConversationMemory::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let memory = SharedMemory::new();
        let other = memory.clone();

        memory.record(EntityKind::Ticket, "123");
        assert_eq!(other.most_recent(EntityKind::Ticket).as_deref(), Some("123"));
    }

    #[test]
    fn test_extract_and_context() {
        let memory = SharedMemory::new();
        let added = memory.extract_entities("order ORD001 for john_doe");
        assert_eq!(added.orders, ["ORD001"]);

        memory.set_context(ContextSlot::Order, "{\"items\": []}".to_string());
        assert_eq!(memory.context().last_order.as_deref(), Some("{\"items\": []}"));
        assert_eq!(memory.summary(), "Known orders: ORD001 | Known customers: john_doe");
    }

    /// Log sink collecting formatted events
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_extraction_batch_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let memory = SharedMemory::new();
        tracing::subscriber::with_default(subscriber, || {
            memory.extract_entities("ticket 123 for ORD001");
            memory.extract_entities("ticket 123 again");
        });

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert_eq!(output.matches("recorded new entity references").count(), 1);
        assert!(output.contains("tickets=1"));
        assert!(output.contains("orders=1"));
    }

    #[tokio::test]
    async fn test_concurrent_extraction_keeps_every_reference() {
        let memory = SharedMemory::new();
        let mut handles = Vec::new();

        for i in 0..16 {
            let handle = memory.clone();
            handles.push(tokio::spawn(async move {
                handle.extract_entities(&format!("ticket {} and ticket 999", 100 + i));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = memory.snapshot();
        assert_eq!(snapshot.ticket_ids.len(), 17);
        assert_eq!(
            snapshot.ticket_ids.iter().filter(|id| id.as_str() == "999").count(),
            1
        );
    }
}
