//! Runtime knobs for the dashboard engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RANKING_SIZE, DEFAULT_SECTOR, SEARCH_DEBOUNCE};
use crate::errors::{Error, Result};
use crate::market_data::{MAX_DIRECTORY_RESULTS, MIN_QUERY_LENGTH};

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Debounce window for search input, in milliseconds
    pub search_debounce_ms: u64,
    /// Queries shorter than this clear the search instead of scheduling a lookup
    pub min_query_len: usize,
    /// Upper bound on candidates shown for one query
    pub max_search_results: usize,
    /// Rows in the top performers / top losers rankings
    pub ranking_size: usize,
    /// Sector given to instruments added without a known classification
    pub placeholder_sector: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
            min_query_len: MIN_QUERY_LENGTH,
            max_search_results: MAX_DIRECTORY_RESULTS,
            ranking_size: DEFAULT_RANKING_SIZE,
            placeholder_sector: DEFAULT_SECTOR.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Rejects values that would make search or rankings degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(Error::InvalidConfigValue(
                "min_query_len must be at least 1".to_string(),
            ));
        }
        if self.max_search_results == 0 {
            return Err(Error::InvalidConfigValue(
                "max_search_results must be at least 1".to_string(),
            ));
        }
        if self.ranking_size == 0 {
            return Err(Error::InvalidConfigValue(
                "ranking_size must be at least 1".to_string(),
            ));
        }
        if self.placeholder_sector.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "placeholder_sector must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
