//! Debounced, cancellable query resolution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::config::DashboardConfig;
use crate::market_data::{DirectoryEntry, InstrumentDirectory, MarketDataError};

use super::search_events::SearchEventSink;
use super::SearchState;

/// Resolves query text into directory candidates.
///
/// Each call to [`on_query_change`](Self::on_query_change) cancels whatever the
/// previous call scheduled and starts a new debounce timer. When the timer
/// expires the directory is queried; the result is applied only if no newer
/// query arrived in the meantime.
///
/// Cloning is cheap and clones share the same state.
#[derive(Clone)]
pub struct SearchResolver {
    inner: Arc<ResolverInner>,
}

struct ResolverInner {
    directory: Arc<dyn InstrumentDirectory>,
    sink: Arc<dyn SearchEventSink>,
    debounce: Duration,
    min_query_len: usize,
    max_results: usize,
    state: RwLock<SearchState>,
    generation: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl SearchResolver {
    pub fn new(
        directory: Arc<dyn InstrumentDirectory>,
        config: &DashboardConfig,
        sink: Arc<dyn SearchEventSink>,
    ) -> Self {
        Self {
            inner: Arc::new(ResolverInner {
                directory,
                sink,
                debounce: config.search_debounce(),
                min_query_len: config.min_query_len,
                max_results: config.max_search_results,
                state: RwLock::new(SearchState::default()),
                generation: AtomicU64::new(0),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Feeds the latest query text.
    ///
    /// Text shorter than the minimum length resets the search immediately
    /// without scheduling a lookup. Must be called from within a Tokio runtime.
    pub fn on_query_change(&self, text: &str) {
        let searchable = text.trim().chars().count() >= self.inner.min_query_len;
        let token = searchable.then(CancellationToken::new);

        // Bumping the generation, swapping the token and emitting all happen
        // under the state lock so sink events follow the order of inputs.
        let generation = {
            let mut state = self.inner.write_state();
            let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(previous) = self.inner.swap_token(token.clone()) {
                previous.cancel();
            }

            if token.is_some() {
                state.query = text.to_string();
                state.pending = true;
            } else {
                *state = SearchState::idle(text);
            }
            self.inner.sink.emit(state.clone());
            generation
        };

        let Some(token) = token else {
            return;
        };

        let inner = Arc::clone(&self.inner);
        let query = text.to_string();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Search for '{}' superseded before lookup", query);
                    return;
                }
                _ = tokio::time::sleep(inner.debounce) => {}
            }

            debug!("Looking up '{}' in {}", query.trim(), inner.directory.id());
            let result = tokio::select! {
                _ = token.cancelled() => {
                    debug!("Search for '{}' superseded during lookup", query);
                    return;
                }
                result = inner.directory.lookup(query.trim()) => result,
            };

            inner.complete(generation, &query, result);
        });
    }

    /// Resets the search to the idle state and cancels any pending lookup.
    pub fn clear(&self) {
        self.on_query_change("");
    }

    /// Snapshot of the current search state.
    pub fn state(&self) -> SearchState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a search with candidates is currently being shown.
    pub fn is_active(&self) -> bool {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_active()
    }
}

impl ResolverInner {
    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SearchState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn swap_token(&self, token: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, token)
    }

    fn complete(
        &self,
        generation: u64,
        query: &str,
        result: Result<Vec<DirectoryEntry>, MarketDataError>,
    ) {
        let candidates = match result {
            Ok(mut entries) => {
                entries.truncate(self.max_results);
                debug!("Lookup for '{}' returned {} candidate(s)", query.trim(), entries.len());
                entries
            }
            Err(e) => {
                warn!("Lookup for '{}' failed: {}", query.trim(), e);
                Vec::new()
            }
        };

        let mut state = self.write_state();
        if self.generation.load(Ordering::SeqCst) != generation || state.query != query {
            debug!("Discarded stale results for '{}'", query.trim());
            return;
        }
        state.candidates = candidates;
        state.pending = false;
        self.sink.emit(state.clone());
    }
}
