use serde_json::Value;
use tokio::sync::broadcast;

/// Event names published on the SSE stream.
pub const SEARCH_CANDIDATES_CHANGED: &str = "search:candidates-changed";
pub const INSTRUMENTS_CHANGED: &str = "instruments:changed";
pub const WATCHLIST_CHANGED: &str = "watchlist:changed";
pub const QUOTES_REFRESHED: &str = "quotes:refreshed";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Broadcast bus that fans out events to every connected stream.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}
