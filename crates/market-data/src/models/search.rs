//! Directory entry model for symbol lookup.

use serde::{Deserialize, Serialize};

/// A candidate returned by an instrument directory lookup.
///
/// Entries are immutable; they only become tracked instruments once the
/// dashboard merges them into its instrument set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Symbol/ticker (e.g., "AAPL", "BRK.B")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc.")
    pub name: String,

    /// Instrument type (e.g., "Equity", "ETF")
    #[serde(rename = "type")]
    pub asset_type: String,

    /// Listing region (e.g., "United States", "Canada")
    pub region: String,

    /// Trading currency (e.g., "USD", "CAD")
    pub currency: String,
}

impl DirectoryEntry {
    /// Create a new entry with all fields.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<String>,
        region: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            asset_type: asset_type.into(),
            region: region.into(),
            currency: currency.into(),
        }
    }

    /// Shorthand for a US-listed equity priced in USD.
    pub fn us_equity(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(symbol, name, "Equity", "United States", "USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_equity_defaults() {
        let entry = DirectoryEntry::us_equity("JPM", "JPMorgan Chase & Co");
        assert_eq!(entry.asset_type, "Equity");
        assert_eq!(entry.region, "United States");
        assert_eq!(entry.currency, "USD");
    }

    #[test]
    fn test_serializes_type_field() {
        let entry = DirectoryEntry::new("SHOP", "Shopify Inc Class A", "Equity", "Canada", "CAD");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "Equity");
        assert_eq!(json["currency"], "CAD");
        assert!(json.get("assetType").is_none());
    }
}
