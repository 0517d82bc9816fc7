//! Directory trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::DirectoryEntry;

/// Lookup capability mapping a symbol or name fragment to candidate instruments.
///
/// Implementations must be side-effect free and restartable: calling `lookup`
/// twice with the same query returns the same candidates. They may be backed
/// by a static table or a remote symbol-search API.
#[async_trait]
pub trait InstrumentDirectory: Send + Sync {
    /// Identifier used in logs (e.g. "STATIC", "ALPHA_VANTAGE").
    fn id(&self) -> &'static str;

    /// Resolve `query` into at most [`MAX_DIRECTORY_RESULTS`](super::MAX_DIRECTORY_RESULTS)
    /// candidates, deduplicated by symbol.
    ///
    /// Queries shorter than [`MIN_QUERY_LENGTH`](super::MIN_QUERY_LENGTH) return an
    /// empty list without performing a scan.
    async fn lookup(&self, query: &str) -> Result<Vec<DirectoryEntry>, MarketDataError>;
}
