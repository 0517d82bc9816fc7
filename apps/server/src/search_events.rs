//! Bridges search state transitions onto the server event bus.

use marketdash_core::search::{SearchEventSink, SearchState};

use crate::events::{EventBus, ServerEvent, SEARCH_CANDIDATES_CHANGED};

pub struct WebSearchEventSink {
    event_bus: EventBus,
}

impl WebSearchEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

impl SearchEventSink for WebSearchEventSink {
    fn emit(&self, state: SearchState) {
        match serde_json::to_value(&state) {
            Ok(payload) => self
                .event_bus
                .publish(ServerEvent::with_payload(SEARCH_CANDIDATES_CHANGED, payload)),
            Err(err) => tracing::error!("Failed to serialize search state: {}", err),
        }
    }
}
