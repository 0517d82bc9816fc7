//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `search` - Directory lookup candidates (DirectoryEntry)
//! - `quote` - Latest quote data (Quote)

mod quote;
mod search;

pub use quote::Quote;
pub use search::DirectoryEntry;
