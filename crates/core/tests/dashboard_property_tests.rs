//! Property-based integration tests for the dashboard engine.
//!
//! These tests check invariants of the instrument set, watchlist, directory
//! and derived views over randomly generated inputs, using `proptest`.

use std::collections::HashSet;

use marketdash_core::instruments::{Instrument, InstrumentSet};
use marketdash_core::market_data::{DirectoryEntry, StaticDirectory};
use marketdash_core::views::{counts, sector_allocation, table_rows, top_losers, top_performers};
use marketdash_core::watchlist::Watchlist;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}"
}

fn arb_sector() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Technology".to_string()),
        Just("Consumer Discretionary".to_string()),
        Just("Communication Services".to_string()),
        Just("Energy".to_string()),
        Just("Financials".to_string()),
    ]
}

/// Instrument with a change percent between -20.00 and 20.00.
fn arb_instrument() -> impl Strategy<Value = Instrument> {
    (arb_symbol(), arb_sector(), -2000i64..=2000, 1i64..100_000).prop_map(
        |(symbol, sector, pct, price)| {
            Instrument::new(&symbol, format!("{} Holdings", symbol), sector).with_quote(
                Decimal::new(price, 2),
                Decimal::ZERO,
                Decimal::new(pct, 2),
            )
        },
    )
}

/// Instruments with unique symbols, as an instrument set would hold them.
fn arb_instruments(max_count: usize) -> impl Strategy<Value = Vec<Instrument>> {
    proptest::collection::vec(arb_instrument(), 0..=max_count).prop_map(|instruments| {
        let mut seen = HashSet::new();
        instruments
            .into_iter()
            .filter(|i| seen.insert(i.symbol.clone()))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding the same symbol twice leaves the watchlist as a single add would.
    #[test]
    fn prop_watchlist_add_is_idempotent(
        initial in proptest::collection::vec(arb_symbol(), 0..10),
        symbol in arb_symbol()
    ) {
        let mut once = Watchlist::from_symbols(&initial);
        once.add(&symbol);

        let mut twice = Watchlist::from_symbols(&initial);
        twice.add(&symbol);
        twice.add(&symbol);

        prop_assert_eq!(once.symbols(), twice.symbols());
    }

    /// Removing an absent symbol is a no-op.
    #[test]
    fn prop_watchlist_remove_absent_is_noop(
        initial in proptest::collection::vec(arb_symbol(), 0..10),
        symbol in arb_symbol()
    ) {
        let mut watchlist = Watchlist::from_symbols(&initial);
        watchlist.remove(&symbol);
        let before = watchlist.clone();

        prop_assert!(!watchlist.remove(&symbol));
        prop_assert_eq!(watchlist, before);
    }

    /// A second merge of the same symbol fails and leaves the set size unchanged.
    #[test]
    fn prop_merge_rejects_duplicates(
        instruments in arb_instruments(20),
        candidate in arb_instrument()
    ) {
        let mut set = InstrumentSet::default();
        set.load(instruments);

        let first = set.merge(candidate.clone());
        let size = set.len();
        let second = set.merge(candidate);

        prop_assert!(second.is_err());
        prop_assert_eq!(set.len(), size);
        if first.is_ok() {
            prop_assert!(set.contains(&first.unwrap().symbol));
        }
    }

    /// Merging a new symbol and removing it restores the prior content.
    #[test]
    fn prop_merge_then_remove_round_trips(
        instruments in arb_instruments(20),
        symbol in "[A-Z]{6}"
    ) {
        let mut set = InstrumentSet::default();
        set.load(instruments);
        let before = set.all().to_vec();

        prop_assert!(set.merge(DirectoryEntry::us_equity(&symbol, "New Co")).is_ok());
        prop_assert!(set.remove(&symbol));
        prop_assert_eq!(set.all(), before.as_slice());
    }

    /// Rankings are ordered by change percent and stable for ties.
    #[test]
    fn prop_rankings_sorted_and_stable(
        instruments in arb_instruments(30),
        n in 0usize..12
    ) {
        let position = |symbol: &str| instruments.iter().position(|i| i.symbol == symbol);

        let top = top_performers(&instruments, n);
        prop_assert_eq!(top.len(), n.min(instruments.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].change_percent >= pair[1].change_percent);
            if pair[0].change_percent == pair[1].change_percent {
                prop_assert!(position(&pair[0].symbol) < position(&pair[1].symbol));
            }
        }

        let bottom = top_losers(&instruments, n);
        prop_assert_eq!(bottom.len(), n.min(instruments.len()));
        for pair in bottom.windows(2) {
            prop_assert!(pair[0].change_percent <= pair[1].change_percent);
            if pair[0].change_percent == pair[1].change_percent {
                prop_assert!(position(&pair[0].symbol) < position(&pair[1].symbol));
            }
        }
    }

    /// Every instrument is a gainer, a loser or unchanged.
    #[test]
    fn prop_breadth_partitions_the_set(instruments in arb_instruments(30)) {
        let breadth = counts(&instruments);
        prop_assert_eq!(breadth.gainers + breadth.losers + breadth.unchanged, instruments.len());
        prop_assert_eq!(
            breadth.gainers,
            instruments.iter().filter(|i| i.change_percent > Decimal::ZERO).count()
        );
    }

    /// Sector shares add up to 100 within one rounding step per sector.
    #[test]
    fn prop_sector_shares_sum_to_hundred(instruments in arb_instruments(30)) {
        let allocation = sector_allocation(&instruments);
        if instruments.is_empty() {
            prop_assert!(allocation.is_empty());
        } else {
            let total: Decimal = allocation.iter().map(|a| a.percentage).sum();
            let tolerance = Decimal::new(5, 2) * Decimal::from(allocation.len());
            prop_assert!((total - Decimal::from(100)).abs() <= tolerance);

            let count: usize = allocation.iter().map(|a| a.count).sum();
            prop_assert_eq!(count, instruments.len());
        }
    }

    /// An active search hides the table; otherwise rows are an ordered subset matching the query.
    #[test]
    fn prop_table_rows_filter(instruments in arb_instruments(20), query in "[a-zA-Z]{0,3}") {
        prop_assert!(table_rows(&instruments, &query, true).is_empty());

        let rows = table_rows(&instruments, &query, false);
        let needle = query.to_lowercase();
        for row in &rows {
            prop_assert!(
                row.symbol.to_lowercase().contains(&needle)
                    || row.name.to_lowercase().contains(&needle)
            );
        }
        let mut last = None;
        for row in &rows {
            let idx = instruments.iter().position(|i| i.symbol == row.symbol);
            prop_assert!(idx > last);
            last = idx;
        }
    }

    /// Directory results are bounded, unique, and empty for short queries.
    #[test]
    fn prop_directory_results_bounded_and_unique(query in "[a-zA-Z ]{0,6}") {
        let directory = StaticDirectory::default();
        let results = directory.find(&query);

        if query.trim().chars().count() < 2 {
            prop_assert!(results.is_empty());
        }
        prop_assert!(results.len() <= 10);

        let unique: HashSet<&str> = results.iter().map(|e| e.symbol.as_str()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }
}
