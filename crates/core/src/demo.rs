//! Bundled sample data for running the dashboard without a quote provider.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SECTOR;
use crate::instruments::{normalize_symbol, Instrument, QuoteStatus, Volume};

/// Symbols loaded on startup.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "UBER",
];

/// Symbols on the watchlist on startup.
pub const DEFAULT_WATCHLIST: &[&str] = &["AAPL", "MSFT", "TSLA", "NVDA", "META", "NFLX"];

struct SampleRow {
    symbol: &'static str,
    name: &'static str,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    volume: &'static str,
    sector: &'static str,
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: dec!(175.84),
        change: dec!(2.31),
        change_percent: dec!(1.33),
        volume: "45.2M",
        sector: "Technology",
    },
    SampleRow {
        symbol: "MSFT",
        name: "Microsoft Corp.",
        price: dec!(374.51),
        change: dec!(5.23),
        change_percent: dec!(1.42),
        volume: "32.1M",
        sector: "Technology",
    },
    SampleRow {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        price: dec!(138.21),
        change: dec!(-1.45),
        change_percent: dec!(-1.04),
        volume: "28.5M",
        sector: "Technology",
    },
    SampleRow {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        price: dec!(145.86),
        change: dec!(3.12),
        change_percent: dec!(2.18),
        volume: "41.7M",
        sector: "Consumer Discretionary",
    },
    SampleRow {
        symbol: "TSLA",
        name: "Tesla Inc.",
        price: dec!(248.87),
        change: dec!(-7.23),
        change_percent: dec!(-2.82),
        volume: "52.6M",
        sector: "Consumer Discretionary",
    },
    SampleRow {
        symbol: "META",
        name: "Meta Platforms Inc.",
        price: dec!(318.75),
        change: dec!(4.12),
        change_percent: dec!(1.31),
        volume: "19.5M",
        sector: "Technology",
    },
    SampleRow {
        symbol: "NVDA",
        name: "NVIDIA Corp.",
        price: dec!(875.28),
        change: dec!(12.54),
        change_percent: dec!(1.45),
        volume: "35.6M",
        sector: "Technology",
    },
    SampleRow {
        symbol: "NFLX",
        name: "Netflix Inc.",
        price: dec!(421.32),
        change: dec!(-3.87),
        change_percent: dec!(-0.91),
        volume: "8.2M",
        sector: "Communication Services",
    },
    SampleRow {
        symbol: "UBER",
        name: "Uber Technologies",
        price: dec!(56.23),
        change: dec!(-1.42),
        change_percent: dec!(-2.46),
        volume: "18.7M",
        sector: "Technology",
    },
];

fn sample_row(symbol: &str) -> Option<&'static SampleRow> {
    let symbol = normalize_symbol(symbol);
    SAMPLE_ROWS.iter().find(|row| row.symbol == symbol)
}

/// The nine sample instruments, in [`DEFAULT_SYMBOLS`] order.
pub fn demo_instruments() -> Vec<Instrument> {
    SAMPLE_ROWS
        .iter()
        .map(|row| {
            Instrument::new(row.symbol, row.name, row.sector)
                .with_quote(row.price, row.change, row.change_percent)
                .with_volume(Volume::Display(row.volume.to_string()))
                .with_status(QuoteStatus::Sample)
        })
        .collect()
}

/// Display name for a known symbol, or `"{SYMBOL} Corp."`.
pub fn company_name(symbol: &str) -> String {
    match sample_row(symbol) {
        Some(row) => row.name.to_string(),
        None => format!("{} Corp.", normalize_symbol(symbol)),
    }
}

/// Sector of a sample symbol, if it is one.
pub fn known_sector(symbol: &str) -> Option<&'static str> {
    sample_row(symbol).map(|row| row.sector)
}

/// Sector for a known symbol, or the default sector.
pub fn sector_for(symbol: &str) -> &'static str {
    known_sector(symbol).unwrap_or(DEFAULT_SECTOR)
}

/// Headline index level shown above the instrument table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
}

impl MarketIndex {
    fn new(id: &str, name: &str, price: Decimal, change: Decimal, change_percent: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
        }
    }
}

/// Snapshot of the major indices.
pub fn market_indices() -> Vec<MarketIndex> {
    vec![
        MarketIndex::new("sp500", "S&P 500", dec!(4185.47), dec!(12.38), dec!(0.30)),
        MarketIndex::new("nasdaq", "NASDAQ", dec!(12843.81), dec!(-24.67), dec!(-0.19)),
        MarketIndex::new("dow", "DOW", dec!(33976.61), dec!(156.82), dec!(0.46)),
        MarketIndex::new("vix", "VIX", dec!(18.45), dec!(0.73), dec!(4.12)),
    ]
}
