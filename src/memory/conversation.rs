//! Conversation memory for a single support session
//!
//! Accumulates ticket, order, customer id and customer name references
//! seen in user input and backend responses, and renders them as a
//! one-line digest for the model prompt.

use serde::{Deserialize, Serialize};

use super::context::CurrentContext;
use super::entities::{EntityKind, EntityList};
use super::extraction::{self, ExtractedEntities};

/// Summary returned when nothing has been recorded yet
pub const NO_CONTEXT: &str = "No context";

/// Separator between summary categories
const SUMMARY_DELIMITER: &str = " | ";

/// Entity memory scoped to one conversation
///
/// Collections only grow; there is no removal operation.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    ticket_ids: EntityList,
    order_ids: EntityList,
    customer_ids: EntityList,
    customer_names: EntityList,
    context: CurrentContext,
}

/// Serializable copy of the remembered entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub ticket_ids: EntityList,
    pub order_ids: EntityList,
    pub customer_ids: EntityList,
    pub customer_names: EntityList,
    pub context: CurrentContext,
}

impl ConversationMemory {
    /// Create an empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a ticket id as given
    pub fn record_ticket(&mut self, id: &str) -> bool {
        self.ticket_ids.insert(id)
    }

    /// Remember an order id as given
    pub fn record_order(&mut self, id: &str) -> bool {
        self.order_ids.insert(id)
    }

    /// Remember a customer id, lower-cased
    pub fn record_customer(&mut self, id: &str) -> bool {
        self.customer_ids.insert(&id.to_lowercase())
    }

    /// Remember a customer display name as given
    pub fn record_customer_name(&mut self, name: &str) -> bool {
        self.customer_names.insert(name)
    }

    /// Record a single reference of the given kind
    pub fn record(&mut self, kind: EntityKind, value: &str) -> bool {
        match kind {
            EntityKind::Ticket => self.record_ticket(value),
            EntityKind::Order => self.record_order(value),
            EntityKind::Customer => self.record_customer(value),
            EntityKind::CustomerName => self.record_customer_name(value),
        }
    }

    /// Scan `text` and record every entity reference found
    ///
    /// Returns only the references that were not already known, so
    /// callers can report what a turn added.
    pub fn extract_entities(&mut self, text: &str) -> ExtractedEntities {
        self.apply(&extraction::extract(text))
    }

    /// Record a batch of already-extracted references
    ///
    /// Logs one debug event per batch that added anything.
    pub fn apply(&mut self, found: &ExtractedEntities) -> ExtractedEntities {
        let mut added = ExtractedEntities::default();
        for id in &found.tickets {
            if self.record_ticket(id) {
                added.tickets.push(id.clone());
            }
        }
        for id in &found.orders {
            if self.record_order(id) {
                added.orders.push(id.clone());
            }
        }
        for id in &found.customers {
            if self.record_customer(id) {
                added.customers.push(id.to_lowercase());
            }
        }
        for name in &found.customer_names {
            if self.record_customer_name(name) {
                added.customer_names.push(name.clone());
            }
        }

        if !added.is_empty() {
            tracing::debug!(
                tickets = added.tickets.len(),
                orders = added.orders.len(),
                customers = added.customers.len(),
                names = added.customer_names.len(),
                "recorded new entity references"
            );
        }
        added
    }

    /// Last-inserted entry of a collection
    pub fn most_recent(&self, kind: EntityKind) -> Option<&str> {
        self.entities(kind).last()
    }

    /// Collection for `kind`, in first-seen order
    pub fn entities(&self, kind: EntityKind) -> &EntityList {
        match kind {
            EntityKind::Ticket => &self.ticket_ids,
            EntityKind::Order => &self.order_ids,
            EntityKind::Customer => &self.customer_ids,
            EntityKind::CustomerName => &self.customer_names,
        }
    }

    /// Single-line digest of every non-empty collection
    ///
    /// Categories always appear in the order tickets, orders, customers,
    /// names. Returns [`NO_CONTEXT`] when everything is empty.
    pub fn summary(&self) -> String {
        self.summary_with_window(None)
    }

    /// Like [`summary`](Self::summary) but each category lists at most
    /// its `window` most recent entries
    pub fn summary_with_window(&self, window: Option<usize>) -> String {
        let parts: Vec<String> = EntityKind::ALL
            .iter()
            .filter_map(|&kind| {
                let list = self.entities(kind);
                if list.is_empty() {
                    return None;
                }
                let shown = match window {
                    Some(n) => list.last_n(n),
                    None => list.as_slice(),
                };
                Some(format!("{}: {}", kind.label(), shown.join(", ")))
            })
            .collect();

        if parts.is_empty() {
            NO_CONTEXT.to_string()
        } else {
            parts.join(SUMMARY_DELIMITER)
        }
    }

    /// Latest raw payloads per lookup category
    pub fn context(&self) -> &CurrentContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut CurrentContext {
        &mut self.context
    }

    /// Total references across all collections
    pub fn len(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.entities(k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy suitable for serialization
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            ticket_ids: self.ticket_ids.clone(),
            order_ids: self.order_ids.clone(),
            customer_ids: self.customer_ids.clone(),
            customer_names: self.customer_names.clone(),
            context: self.context.clone(),
        }
    }
}
