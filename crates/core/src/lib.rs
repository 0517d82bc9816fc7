//! Marketdash Core - dashboard state and resolution engine.
//!
//! This crate owns everything that has state-consistency concerns: the set of
//! tracked instruments, the watchlist, debounced search resolution and the
//! derived views computed from them. Market data access lives in
//! `marketdash-market-data` and is injected through its traits.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod demo;
pub mod errors;
pub mod instruments;
pub mod search;
pub mod views;
pub mod watchlist;

pub use marketdash_market_data as market_data;

pub use config::DashboardConfig;
pub use dashboard::{DashboardService, DashboardServiceTrait, RefreshReport};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
