//! Instrument directory: resolves free-text queries to candidate instruments.
//!
//! - [`InstrumentDirectory`] is the lookup capability injected into the search resolver
//! - [`StaticDirectory`] is an in-memory, alias-keyed table used offline and in tests
//! - [`catalog`] holds the default table shipped with the dashboard

pub mod catalog;
mod static_directory;
mod traits;

pub use static_directory::{DirectoryGroup, StaticDirectory};
pub use traits::InstrumentDirectory;

/// Queries shorter than this (after trimming) never reach a directory.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Upper bound on candidates returned by a single lookup.
pub const MAX_DIRECTORY_RESULTS: usize = 10;

/// Returns true if `query` is long enough to start a search.
///
/// A short query means "no search active", which is distinct from a search
/// that ran and matched nothing.
pub fn is_searchable_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LENGTH
}
