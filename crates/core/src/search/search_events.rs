//! Observers of search state transitions.

use std::sync::{Arc, Mutex, PoisonError};

use super::SearchState;

/// Receives a snapshot after every search state transition.
///
/// `emit()` is called with the resolver's state lock held, so it must not
/// block or call back into the resolver.
pub trait SearchEventSink: Send + Sync {
    fn emit(&self, state: SearchState);
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpSearchEventSink;

impl SearchEventSink for NoOpSearchEventSink {
    fn emit(&self, _state: SearchState) {}
}

/// Collects emitted states for assertions.
#[derive(Clone, Default)]
pub struct MockSearchEventSink {
    states: Arc<Mutex<Vec<SearchState>>>,
}

impl MockSearchEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> Vec<SearchState> {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<SearchState> {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.states.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SearchEventSink for MockSearchEventSink {
    fn emit(&self, state: SearchState) {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(state);
    }
}
