//! Marketdash Market Data Crate
//!
//! This crate provides the external collaborators the dashboard core depends on:
//! symbol lookup and point-in-time quotes.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A static, alias-keyed instrument directory used for offline search
//! - Provider-backed directories (Alpha Vantage `SYMBOL_SEARCH`)
//! - Latest-quote fetching (Alpha Vantage `GLOBAL_QUOTE`)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +---------------------+
//! |   Query text     | --> | InstrumentDirectory |  (static table or provider)
//! +------------------+     +---------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  DirectoryEntry  |  (candidate, not yet tracked)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  QuoteProvider   |  (Alpha Vantage, fakes in tests)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |      Quote       |  (point-in-time market data)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`DirectoryEntry`] - A candidate match returned by symbol lookup
//! - [`Quote`] - Latest quote for a single symbol
//! - [`InstrumentDirectory`] - Lookup capability injected into the search resolver
//! - [`QuoteProvider`] - Quote capability injected into the dashboard

pub mod directory;
pub mod errors;
pub mod models;
pub mod provider;

pub use directory::{
    is_searchable_query, InstrumentDirectory, StaticDirectory, MAX_DIRECTORY_RESULTS,
    MIN_QUERY_LENGTH,
};
pub use errors::{MarketDataError, RetryClass};
pub use models::{DirectoryEntry, Quote};
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::QuoteProvider;
