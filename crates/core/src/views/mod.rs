//! Derived views - pure functions over the instrument set, watchlist and search.

mod views_model;
mod views_service;

#[cfg(test)]
mod views_tests;

pub use views_model::{DashboardSummary, DashboardViews, MarketBreadth, SectorAllocation};
pub use views_service::{
    counts, sector_allocation, table_rows, top_losers, top_performers, watchlist_rows,
};
