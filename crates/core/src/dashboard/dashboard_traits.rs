use async_trait::async_trait;

use crate::errors::Result;
use crate::instruments::Instrument;
use crate::market_data::DirectoryEntry;
use crate::search::SearchState;
use crate::views::DashboardViews;

use super::RefreshReport;

/// Operations a UI (or the HTTP adapter) performs on the dashboard.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Replace the instrument set wholesale. Clears the last error.
    fn load(&self, instruments: Vec<Instrument>);

    /// Load the bundled sample instruments and default watchlist.
    fn load_demo(&self);

    fn instruments(&self) -> Vec<Instrument>;

    /// Add a search candidate to the instrument set.
    ///
    /// Fetches a live quote when a provider is configured and falls back to
    /// a placeholder record otherwise. On success the search is cleared.
    async fn add_candidate(&self, entry: DirectoryEntry) -> Result<Instrument>;

    fn remove_instrument(&self, symbol: &str) -> bool;

    /// Re-fetch quotes for every tracked symbol.
    async fn refresh_quotes(&self) -> Result<RefreshReport>;

    fn watchlist(&self) -> Vec<String>;

    /// Add a tracked symbol to the watchlist. Returns `false` if already present.
    fn add_to_watchlist(&self, symbol: &str) -> Result<bool>;

    /// Returns `false` if the symbol was not on the watchlist.
    fn remove_from_watchlist(&self, symbol: &str) -> bool;

    fn on_query_change(&self, text: &str);

    fn search_state(&self) -> SearchState;

    fn last_error(&self) -> Option<String>;

    fn clear_error(&self);

    /// All derived views, computed from one consistent snapshot.
    fn views(&self) -> DashboardViews;
}
