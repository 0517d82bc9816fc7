use serde::{Deserialize, Serialize};

use crate::market_data::DirectoryEntry;

/// Ephemeral state of the current search.
///
/// `candidates` always belong to the latest query that completed a lookup;
/// a newer query keeps showing them while `pending` until its own lookup lands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub candidates: Vec<DirectoryEntry>,
    pub pending: bool,
}

impl SearchState {
    /// No search in progress for `query` (empty or below the minimum length).
    pub fn idle(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            candidates: Vec::new(),
            pending: false,
        }
    }

    /// A search is active when it has candidates to show.
    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }
}
