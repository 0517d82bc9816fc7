//! View computations.
//!
//! Every function here is pure and recomputes from its inputs. Sorting is
//! always stable, so equal `change_percent` values keep their set order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::ALLOCATION_DECIMAL_PRECISION;
use crate::instruments::Instrument;

use super::views_model::{MarketBreadth, SectorAllocation};

/// Rows for the main table.
///
/// While a search is showing candidates the table is suppressed entirely.
/// Otherwise instruments are filtered by case-insensitive substring match of
/// `query` against symbol or name.
pub fn table_rows(instruments: &[Instrument], query: &str, search_active: bool) -> Vec<Instrument> {
    if search_active {
        return Vec::new();
    }

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return instruments.to_vec();
    }

    instruments
        .iter()
        .filter(|i| {
            i.symbol.to_lowercase().contains(&needle) || i.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Tracked instruments on the watchlist, in watchlist order.
///
/// Symbols that are not in the instrument set are skipped.
pub fn watchlist_rows(instruments: &[Instrument], watchlist: &[String]) -> Vec<Instrument> {
    let by_symbol: HashMap<&str, &Instrument> =
        instruments.iter().map(|i| (i.symbol.as_str(), i)).collect();

    watchlist
        .iter()
        .filter_map(|symbol| by_symbol.get(symbol.as_str()).map(|i| (*i).clone()))
        .collect()
}

pub fn counts(instruments: &[Instrument]) -> MarketBreadth {
    instruments
        .iter()
        .fold(MarketBreadth::default(), |mut breadth, i| {
            if i.is_gainer() {
                breadth.gainers += 1;
            } else if i.is_loser() {
                breadth.losers += 1;
            } else {
                breadth.unchanged += 1;
            }
            breadth
        })
}

/// The `n` instruments with the highest `change_percent`.
pub fn top_performers(instruments: &[Instrument], n: usize) -> Vec<Instrument> {
    let mut sorted = instruments.to_vec();
    sorted.sort_by(|a, b| b.change_percent.cmp(&a.change_percent));
    sorted.truncate(n);
    sorted
}

/// The `n` instruments with the lowest `change_percent`.
pub fn top_losers(instruments: &[Instrument], n: usize) -> Vec<Instrument> {
    let mut sorted = instruments.to_vec();
    sorted.sort_by(|a, b| a.change_percent.cmp(&b.change_percent));
    sorted.truncate(n);
    sorted
}

/// Groups instruments by sector.
///
/// Groups are ordered by count descending, ties by first appearance.
/// Percentages are rounded to one decimal place.
pub fn sector_allocation(instruments: &[Instrument]) -> Vec<SectorAllocation> {
    if instruments.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for instrument in instruments {
        match index.get(instrument.sector.as_str()) {
            Some(&idx) => groups[idx].1 += 1,
            None => {
                index.insert(instrument.sector.as_str(), groups.len());
                groups.push((instrument.sector.clone(), 1));
            }
        }
    }

    let total = Decimal::from(instruments.len());
    let mut allocations: Vec<SectorAllocation> = groups
        .into_iter()
        .map(|(sector, count)| SectorAllocation {
            sector,
            count,
            percentage: (Decimal::from(count) / total * dec!(100))
                .round_dp(ALLOCATION_DECIMAL_PRECISION),
        })
        .collect();

    allocations.sort_by(|a, b| b.count.cmp(&a.count));
    allocations
}
