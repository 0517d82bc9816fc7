use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::demo::demo_instruments;
use crate::instruments::Instrument;

fn symbols(rows: &[Instrument]) -> Vec<&str> {
    rows.iter().map(|i| i.symbol.as_str()).collect()
}

fn flat(symbol: &str, sector: &str) -> Instrument {
    Instrument::new(symbol, format!("{} Inc.", symbol), sector)
}

#[test]
fn test_top_performers() {
    let instruments = demo_instruments();
    let top = top_performers(&instruments, 3);

    assert_eq!(symbols(&top), vec!["AMZN", "NVDA", "MSFT"]);
    assert_eq!(top[0].change_percent, dec!(2.18));
}

#[test]
fn test_top_losers() {
    let instruments = demo_instruments();
    let bottom = top_losers(&instruments, 3);

    assert_eq!(symbols(&bottom), vec!["TSLA", "UBER", "GOOGL"]);
    assert_eq!(bottom[0].change_percent, dec!(-2.82));
}

#[test]
fn test_rankings_larger_than_set() {
    let instruments = demo_instruments();
    assert_eq!(top_performers(&instruments, 50).len(), 9);
    assert!(top_losers(&[], 5).is_empty());
}

#[test]
fn test_rankings_are_stable_for_ties() {
    let instruments = vec![
        flat("B", "Tech").with_quote(dec!(1), dec!(0), dec!(1.5)),
        flat("A", "Tech").with_quote(dec!(1), dec!(0), dec!(1.5)),
        flat("C", "Tech").with_quote(dec!(1), dec!(0), dec!(1.50)),
    ];

    assert_eq!(symbols(&top_performers(&instruments, 3)), vec!["B", "A", "C"]);
    assert_eq!(symbols(&top_losers(&instruments, 3)), vec!["B", "A", "C"]);
}

#[test]
fn test_rankings_compare_numerically() {
    // "10.5" sorts before "9.9" as text.
    let instruments = vec![
        flat("NINE", "Tech").with_quote(dec!(1), dec!(0), dec!(9.9)),
        flat("TEN", "Tech").with_quote(dec!(1), dec!(0), dec!(10.5)),
    ];
    assert_eq!(symbols(&top_performers(&instruments, 1)), vec!["TEN"]);
}

#[test]
fn test_counts() {
    let breadth = counts(&demo_instruments());
    assert_eq!(breadth.gainers, 5);
    assert_eq!(breadth.losers, 4);
    assert_eq!(breadth.unchanged, 0);
}

#[test]
fn test_zero_change_counts_as_neither() {
    let breadth = counts(&[flat("FLAT", "Tech")]);
    assert_eq!(breadth, MarketBreadth { gainers: 0, losers: 0, unchanged: 1 });
}

#[test]
fn test_sector_allocation() {
    let allocation = sector_allocation(&demo_instruments());

    let summary: Vec<(&str, usize, Decimal)> = allocation
        .iter()
        .map(|a| (a.sector.as_str(), a.count, a.percentage))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Technology", 6, dec!(66.7)),
            ("Consumer Discretionary", 2, dec!(22.2)),
            ("Communication Services", 1, dec!(11.1)),
        ]
    );

    let total: Decimal = allocation.iter().map(|a| a.percentage).sum();
    assert_eq!(total, dec!(100.0));
}

#[test]
fn test_sector_allocation_ties_keep_first_appearance() {
    let instruments = vec![
        flat("A", "Energy"),
        flat("B", "Utilities"),
        flat("C", "Utilities"),
        flat("D", "Energy"),
        flat("E", "Materials"),
    ];
    let sectors: Vec<String> = sector_allocation(&instruments)
        .into_iter()
        .map(|a| a.sector)
        .collect();
    assert_eq!(sectors, vec!["Energy", "Utilities", "Materials"]);
}

#[test]
fn test_sector_allocation_empty() {
    assert!(sector_allocation(&[]).is_empty());
}

#[test]
fn test_table_rows_hidden_while_search_active() {
    assert!(table_rows(&demo_instruments(), "", true).is_empty());
}

#[test]
fn test_table_rows_filters_symbol_or_name() {
    let instruments = demo_instruments();

    assert_eq!(symbols(&table_rows(&instruments, "", false)).len(), 9);
    assert_eq!(symbols(&table_rows(&instruments, "nv", false)), vec!["NVDA"]);
    // Only "Uber Technologies" has "tech" in its name.
    assert_eq!(
        symbols(&table_rows(&instruments, "tech", false)),
        vec!["UBER"]
    );
    assert_eq!(
        symbols(&table_rows(&instruments, "INC.", false)),
        vec!["AAPL", "GOOGL", "AMZN", "TSLA", "META", "NFLX"]
    );
}

#[test]
fn test_watchlist_rows_follow_watchlist_order() {
    let instruments = demo_instruments();
    let watchlist = vec!["NFLX".to_string(), "AAPL".to_string(), "KO".to_string()];

    assert_eq!(
        symbols(&watchlist_rows(&instruments, &watchlist)),
        vec!["NFLX", "AAPL"]
    );
}
