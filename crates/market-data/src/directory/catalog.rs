//! Default directory table.
//!
//! Each row is `(lookup key, symbol, name, region, currency)`. Keys are
//! aliases users commonly type ("DISNEY", "COCA"); several keys may point at
//! the same symbol.

use crate::models::DirectoryEntry;

use super::static_directory::DirectoryGroup;

const EQUITY: &str = "Equity";

const DEFAULT_ROWS: &[(&str, &str, &str, &str, &str)] = &[
    ("APPLE", "AAPL", "Apple Inc.", "United States", "USD"),
    ("TESLA", "TSLA", "Tesla Inc.", "United States", "USD"),
    ("META", "META", "Meta Platforms Inc.", "United States", "USD"),
    ("NVIDIA", "NVDA", "NVIDIA Corp.", "United States", "USD"),
    ("NETFLIX", "NFLX", "Netflix Inc.", "United States", "USD"),
    ("UBER", "UBER", "Uber Technologies", "United States", "USD"),
    ("JPM", "JPM", "JPMorgan Chase & Co", "United States", "USD"),
    ("DIS", "DIS", "The Walt Disney Company", "United States", "USD"),
    ("DISNEY", "DIS", "The Walt Disney Company", "United States", "USD"),
    ("COCA", "KO", "The Coca-Cola Company", "United States", "USD"),
    ("AMAZON", "AMZN", "Amazon.com Inc", "United States", "USD"),
    ("MICROSOFT", "MSFT", "Microsoft Corporation", "United States", "USD"),
    ("GOOGLE", "GOOGL", "Alphabet Inc Class A", "United States", "USD"),
    ("WALMART", "WMT", "Walmart Inc", "United States", "USD"),
    ("JOHNSON", "JNJ", "Johnson & Johnson", "United States", "USD"),
    ("VISA", "V", "Visa Inc Class A", "United States", "USD"),
    ("MASTERCARD", "MA", "Mastercard Inc Class A", "United States", "USD"),
    ("BERKSHIRE", "BRK.B", "Berkshire Hathaway Inc Class B", "United States", "USD"),
    ("PROCTER", "PG", "Procter & Gamble Co", "United States", "USD"),
    ("EXXON", "XOM", "Exxon Mobil Corporation", "United States", "USD"),
    ("INTEL", "INTC", "Intel Corporation", "United States", "USD"),
    ("CISCO", "CSCO", "Cisco Systems Inc", "United States", "USD"),
    ("PFIZER", "PFE", "Pfizer Inc", "United States", "USD"),
    ("VERIZON", "VZ", "Verizon Communications Inc", "United States", "USD"),
    ("NIKE", "NKE", "Nike Inc Class B", "United States", "USD"),
    ("MCDONALD", "MCD", "McDonald's Corporation", "United States", "USD"),
    ("STARBUCKS", "SBUX", "Starbucks Corporation", "United States", "USD"),
    ("SPOTIFY", "SPOT", "Spotify Technology S.A.", "United States", "USD"),
    ("ZOOM", "ZM", "Zoom Video Communications Inc", "United States", "USD"),
    ("PAYPAL", "PYPL", "PayPal Holdings Inc", "United States", "USD"),
    ("SHOPIFY", "SHOP", "Shopify Inc Class A", "Canada", "CAD"),
    ("SQUARE", "SQ", "Block Inc Class A", "United States", "USD"),
    ("TWITTER", "TWTR", "Twitter Inc", "United States", "USD"),
    ("SALESFORCE", "CRM", "Salesforce Inc", "United States", "USD"),
    ("ORACLE", "ORCL", "Oracle Corporation", "United States", "USD"),
    ("IBM", "IBM", "International Business Machines Corporation", "United States", "USD"),
    ("AMD", "AMD", "Advanced Micro Devices Inc", "United States", "USD"),
    ("HOME", "HD", "The Home Depot Inc", "United States", "USD"),
    ("LOWES", "LOW", "Lowe's Companies Inc", "United States", "USD"),
    ("TARGET", "TGT", "Target Corporation", "United States", "USD"),
    ("COSTCO", "COST", "Costco Wholesale Corporation", "United States", "USD"),
];

/// Builds the default alias-keyed groups, in table order.
pub fn default_groups() -> Vec<DirectoryGroup> {
    DEFAULT_ROWS
        .iter()
        .map(|(key, symbol, name, region, currency)| {
            DirectoryGroup::new(
                *key,
                vec![DirectoryEntry::new(*symbol, *name, EQUITY, *region, *currency)],
            )
        })
        .collect()
}
