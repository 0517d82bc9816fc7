use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instruments::Instrument;

/// Gainer/loser counts. Instruments with zero change are `unchanged`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBreadth {
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
}

/// One sector's share of the tracked instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub count: usize,
    /// Share of the total count, in percent, one decimal place.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_instruments: usize,
    pub watchlist_count: usize,
    pub search_active: bool,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub loading: bool,
}

/// Everything the UI renders, computed from one consistent state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub summary: DashboardSummary,
    pub breadth: MarketBreadth,
    pub table_rows: Vec<Instrument>,
    pub watchlist_rows: Vec<Instrument>,
    pub top_performers: Vec<Instrument>,
    pub top_losers: Vec<Instrument>,
    pub sector_allocation: Vec<SectorAllocation>,
}
