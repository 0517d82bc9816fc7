use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest market quote for a single symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Symbol the quote was fetched for
    pub symbol: String,

    /// Last traded price
    pub price: Decimal,

    /// Absolute change against the previous close
    pub change: Decimal,

    /// Percentage change against the previous close (1.33 means +1.33%)
    pub change_percent: Decimal,

    /// Shares traded in the session
    pub volume: u64,

    /// Trading day the quote belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_day: Option<NaiveDate>,

    /// Source of the quote (ALPHA_VANTAGE, DEMO, etc.)
    pub source: String,
}

impl Quote {
    /// Create a quote with the required price fields.
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        change: Decimal,
        change_percent: Decimal,
        source: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
            volume: 0,
            trading_day: None,
            source: source.into(),
        }
    }

    /// Set the traded volume.
    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = volume;
        self
    }

    /// Set the trading day.
    pub fn with_trading_day(mut self, day: NaiveDate) -> Self {
        self.trading_day = Some(day);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new("AAPL", dec!(175.84), dec!(2.31), dec!(1.33), "DEMO");
        assert_eq!(quote.price, dec!(175.84));
        assert_eq!(quote.volume, 0);
        assert!(quote.trading_day.is_none());
    }

    #[test]
    fn test_quote_builders() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 29).unwrap();
        let quote = Quote::new("MSFT", dec!(374.51), dec!(5.23), dec!(1.42), "DEMO")
            .with_volume(32_100_000)
            .with_trading_day(day);
        assert_eq!(quote.volume, 32_100_000);
        assert_eq!(quote.trading_day, Some(day));
    }
}
