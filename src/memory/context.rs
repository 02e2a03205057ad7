//! Current context: the latest raw payload fetched per lookup category
//!
//! Each slot holds exactly one payload and is overwritten on every fetch.
//! Only the tool wrappers write here; extraction never touches it.

use serde::{Deserialize, Serialize};

/// Lookup category whose last payload is remembered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSlot {
    Ticket,
    Order,
    Customer,
}

/// Most recent backend payload for each lookup category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentContext {
    pub last_ticket: Option<String>,
    pub last_order: Option<String>,
    pub last_customer: Option<String>,
}

impl CurrentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the payload for `slot`
    pub fn set(&mut self, slot: ContextSlot, payload: String) {
        *self.slot_mut(slot) = Some(payload);
    }

    /// Payload for `slot`, if any fetch has happened
    pub fn get(&self, slot: ContextSlot) -> Option<&str> {
        match slot {
            ContextSlot::Ticket => self.last_ticket.as_deref(),
            ContextSlot::Order => self.last_order.as_deref(),
            ContextSlot::Customer => self.last_customer.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_ticket.is_none() && self.last_order.is_none() && self.last_customer.is_none()
    }

    fn slot_mut(&mut self, slot: ContextSlot) -> &mut Option<String> {
        match slot {
            ContextSlot::Ticket => &mut self.last_ticket,
            ContextSlot::Order => &mut self.last_order,
            ContextSlot::Customer => &mut self.last_customer,
        }
    }
}
