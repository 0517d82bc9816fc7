//! In-memory instrument directory.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use log::debug;

use crate::errors::MarketDataError;
use crate::models::DirectoryEntry;

use super::catalog::default_groups;
use super::traits::InstrumentDirectory;
use super::{is_searchable_query, MAX_DIRECTORY_RESULTS};

const DIRECTORY_ID: &str = "STATIC";

/// Entries reachable through one lookup key.
#[derive(Clone, Debug)]
pub struct DirectoryGroup {
    key: String,
    entries: Vec<DirectoryEntry>,
}

impl DirectoryGroup {
    /// Create a group; the key is stored uppercase.
    pub fn new(key: impl Into<String>, entries: Vec<DirectoryEntry>) -> Self {
        Self {
            key: key.into().to_uppercase(),
            entries,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Substring match against the key, any entry symbol, or any entry name.
    /// `needle` must already be uppercase.
    fn matches(&self, needle: &str) -> bool {
        self.key.contains(needle)
            || self.entries.iter().any(|entry| {
                entry.symbol.to_uppercase().contains(needle)
                    || entry.name.to_uppercase().contains(needle)
            })
    }
}

/// Alias-keyed lookup table.
///
/// Matching policy (case-insensitive):
/// 1. An exact hit on a lookup key or an entry symbol returns that group alone.
/// 2. Otherwise every group whose key, symbol, or name contains the query is
///    collected in table order.
///
/// Results are deduplicated by symbol (first occurrence wins) and truncated to
/// [`MAX_DIRECTORY_RESULTS`].
#[derive(Clone, Debug)]
pub struct StaticDirectory {
    groups: Vec<DirectoryGroup>,
    exact: HashMap<String, usize>,
}

impl StaticDirectory {
    pub fn new(groups: Vec<DirectoryGroup>) -> Self {
        let mut exact: HashMap<String, usize> = HashMap::new();

        // Alias keys take precedence over symbols that happen to collide with them.
        for (idx, group) in groups.iter().enumerate() {
            exact.entry(group.key.clone()).or_insert(idx);
        }
        for (idx, group) in groups.iter().enumerate() {
            for entry in &group.entries {
                exact.entry(entry.symbol.to_uppercase()).or_insert(idx);
            }
        }

        Self { groups, exact }
    }

    /// Number of lookup keys in the table.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Synchronous lookup used by the [`InstrumentDirectory`] implementation.
    pub fn find(&self, query: &str) -> Vec<DirectoryEntry> {
        if !is_searchable_query(query) {
            return Vec::new();
        }

        let needle = query.trim().to_uppercase();

        let candidates: Vec<&DirectoryEntry> = match self.exact.get(&needle) {
            Some(&idx) => self.groups[idx].entries.iter().collect(),
            None => self
                .groups
                .iter()
                .filter(|group| group.matches(&needle))
                .flat_map(|group| group.entries.iter())
                .collect(),
        };

        let mut seen: HashSet<&str> = HashSet::new();
        candidates
            .into_iter()
            .filter(|entry| seen.insert(entry.symbol.as_str()))
            .take(MAX_DIRECTORY_RESULTS)
            .cloned()
            .collect()
    }
}

impl Default for StaticDirectory {
    /// Directory preloaded with the default catalog.
    fn default() -> Self {
        Self::new(default_groups())
    }
}

#[async_trait]
impl InstrumentDirectory for StaticDirectory {
    fn id(&self) -> &'static str {
        DIRECTORY_ID
    }

    async fn lookup(&self, query: &str) -> Result<Vec<DirectoryEntry>, MarketDataError> {
        let results = self.find(query);
        debug!(
            "Static directory: {} candidate(s) for '{}'",
            results.len(),
            query
        );
        Ok(results)
    }
}
