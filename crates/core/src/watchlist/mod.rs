//! Watchlist module - the user's curated subset of symbols.

mod watchlist_model;

pub use watchlist_model::Watchlist;
