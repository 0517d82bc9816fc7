//! Alpha Vantage market data provider implementation.
//!
//! This module provides:
//! - Latest equity quotes via the GLOBAL_QUOTE endpoint
//! - Symbol search via the SYMBOL_SEARCH endpoint
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute
//! (25 per day); the "demo" key only answers for a handful of symbols.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::directory::{is_searchable_query, InstrumentDirectory, MAX_DIRECTORY_RESULTS};
use crate::errors::MarketDataError;
use crate::models::{DirectoryEntry, Quote};
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage market data provider.
///
/// Serves both as a [`QuoteProvider`] and as a remote [`InstrumentDirectory`].
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

/// SYMBOL_SEARCH response
#[derive(Debug, Deserialize)]
struct SymbolSearchResponse {
    #[serde(rename = "bestMatches")]
    best_matches: Option<Vec<SearchMatch>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    #[serde(rename = "1. symbol")]
    symbol: String,
    #[serde(rename = "2. name")]
    name: String,
    #[serde(rename = "3. type")]
    asset_type: String,
    #[serde(rename = "4. region")]
    region: String,
    #[serde(rename = "8. currency")]
    currency: String,
}

impl AlphaVantageProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a provider pointed at a different endpoint (proxies, test servers).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// Check for API-level errors in the response.
    ///
    /// Alpha Vantage answers HTTP 200 for rate limits and bad requests, putting
    /// the explanation in "Error Message", "Note" or "Information".
    fn check_api_error(
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(ref msg) = error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.chars().take(200).collect(),
            });
        }

        for msg in [note, information].into_iter().flatten() {
            if msg.contains("API call frequency")
                || msg.contains("rate limit")
                || msg.contains("requests per day")
            {
                warn!("Alpha Vantage rate limit hit: {}", msg);
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage message: {}", msg);
        }

        Ok(())
    }

    /// Parse a decimal value from a string.
    fn parse_decimal(s: &str) -> Option<Decimal> {
        Decimal::from_str(s.trim()).ok()
    }

    /// Parse "1.3300%" into 1.33.
    fn parse_percent(s: &str) -> Option<Decimal> {
        Self::parse_decimal(s.trim().trim_end_matches('%')).map(|d| d.round_dp(2))
    }

    /// Parse a date string in YYYY-MM-DD format.
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
    }

    /// Convert a GLOBAL_QUOTE body into a [`Quote`].
    fn parse_global_quote(text: &str, symbol: &str) -> Result<Quote, MarketDataError> {
        let response: GlobalQuoteResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        // Unknown symbols come back as an empty "Global Quote" object
        let quote = response
            .global_quote
            .filter(|q| q.symbol.is_some())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let price = quote
            .price
            .as_deref()
            .and_then(Self::parse_decimal)
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Missing price for {}", symbol),
            })?;
        let change = quote
            .change
            .as_deref()
            .and_then(Self::parse_decimal)
            .unwrap_or(Decimal::ZERO);
        let change_percent = quote
            .change_percent
            .as_deref()
            .and_then(Self::parse_percent)
            .unwrap_or(Decimal::ZERO);
        let volume = quote
            .volume
            .as_deref()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let mut result = Quote::new(
            symbol,
            price.round_dp(2),
            change.round_dp(2),
            change_percent,
            PROVIDER_ID,
        )
        .with_volume(volume);

        if let Some(day) = quote.latest_trading_day.as_deref().and_then(Self::parse_date) {
            result = result.with_trading_day(day);
        }

        Ok(result)
    }

    /// Convert a SYMBOL_SEARCH body into directory entries (deduplicated, bounded).
    fn parse_symbol_search(text: &str) -> Result<Vec<DirectoryEntry>, MarketDataError> {
        let response: SymbolSearchResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse search results: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let mut entries: Vec<DirectoryEntry> = Vec::new();
        for m in response.best_matches.unwrap_or_default() {
            if entries.iter().any(|e| e.symbol == m.symbol) {
                continue;
            }
            entries.push(DirectoryEntry::new(
                m.symbol,
                m.name,
                m.asset_type,
                m.region,
                m.currency,
            ));
            if entries.len() == MAX_DIRECTORY_RESULTS {
                break;
            }
        }

        Ok(entries)
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];
        let text = self.fetch(&params).await?;
        let quote = Self::parse_global_quote(&text, symbol)?;

        debug!(
            "Alpha Vantage: {} @ {} ({}%)",
            quote.symbol, quote.price, quote.change_percent
        );

        Ok(quote)
    }
}

#[async_trait]
impl InstrumentDirectory for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, query: &str) -> Result<Vec<DirectoryEntry>, MarketDataError> {
        if !is_searchable_query(query) {
            return Ok(Vec::new());
        }

        debug!("Searching Alpha Vantage for ticker with query: {}", query);
        let params = [("function", "SYMBOL_SEARCH"), ("keywords", query.trim())];
        let text = self.fetch(&params).await?;
        Self::parse_symbol_search(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const IBM_QUOTE: &str = r#"{
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "168.9900",
            "03. high": "170.4800",
            "04. low": "168.4100",
            "05. price": "169.8700",
            "06. volume": "3104917",
            "07. latest trading day": "2024-07-29",
            "08. previous close": "168.8300",
            "09. change": "1.0400",
            "10. change percent": "0.6160%"
        }
    }"#;

    const SEARCH_RESPONSE: &str = r#"{
        "bestMatches": [
            {
                "1. symbol": "TSCO.LON",
                "2. name": "Tesco PLC",
                "3. type": "Equity",
                "4. region": "United Kingdom",
                "5. marketOpen": "08:00",
                "6. marketClose": "16:30",
                "7. timezone": "UTC+01",
                "8. currency": "GBX",
                "9. matchScore": "0.7273"
            },
            {
                "1. symbol": "TSCDF",
                "2. name": "Tesco plc",
                "3. type": "Equity",
                "4. region": "United States",
                "5. marketOpen": "09:30",
                "6. marketClose": "16:00",
                "7. timezone": "UTC-04",
                "8. currency": "USD",
                "9. matchScore": "0.7143"
            },
            {
                "1. symbol": "TSCO.LON",
                "2. name": "Tesco PLC",
                "3. type": "Equity",
                "4. region": "United Kingdom",
                "5. marketOpen": "08:00",
                "6. marketClose": "16:30",
                "7. timezone": "UTC+01",
                "8. currency": "GBX",
                "9. matchScore": "0.5000"
            }
        ]
    }"#;

    #[test]
    fn test_parse_global_quote() {
        let quote = AlphaVantageProvider::parse_global_quote(IBM_QUOTE, "IBM").unwrap();
        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.price, dec!(169.87));
        assert_eq!(quote.change, dec!(1.04));
        assert_eq!(quote.change_percent, dec!(0.62));
        assert_eq!(quote.volume, 3_104_917);
        assert_eq!(
            quote.trading_day,
            Some(NaiveDate::from_ymd_opt(2024, 7, 29).unwrap())
        );
        assert_eq!(quote.source, "ALPHA_VANTAGE");
    }

    #[test]
    fn test_parse_global_quote_unknown_symbol() {
        let err = AlphaVantageProvider::parse_global_quote(r#"{"Global Quote": {}}"#, "NOPE")
            .unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(s) if s == "NOPE"));
    }

    #[test]
    fn test_parse_global_quote_rate_limited() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let err = AlphaVantageProvider::parse_global_quote(body, "IBM").unwrap_err();
        assert!(matches!(err, MarketDataError::RateLimited { .. }));
    }

    #[test]
    fn test_parse_global_quote_error_message() {
        let body = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#;
        let err = AlphaVantageProvider::parse_global_quote(body, "IBM").unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[test]
    fn test_parse_global_quote_malformed_body() {
        let err = AlphaVantageProvider::parse_global_quote("not json", "IBM").unwrap_err();
        assert!(matches!(err, MarketDataError::ProviderError { .. }));
    }

    #[test]
    fn test_parse_symbol_search_dedups_by_symbol() {
        let entries = AlphaVantageProvider::parse_symbol_search(SEARCH_RESPONSE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol, "TSCO.LON");
        assert_eq!(entries[0].currency, "GBX");
        assert_eq!(entries[1].symbol, "TSCDF");
        assert_eq!(entries[1].region, "United States");
    }

    #[test]
    fn test_parse_symbol_search_without_matches() {
        let entries = AlphaVantageProvider::parse_symbol_search(r#"{"bestMatches": []}"#).unwrap();
        assert!(entries.is_empty());
        let entries = AlphaVantageProvider::parse_symbol_search("{}").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(AlphaVantageProvider::parse_percent("-2.8200%"), Some(dec!(-2.82)));
        assert_eq!(AlphaVantageProvider::parse_percent("1.4"), Some(dec!(1.4)));
        assert!(AlphaVantageProvider::parse_percent("n/a").is_none());
    }

    #[tokio::test]
    async fn test_short_query_skips_request() {
        // Unroutable base URL: any request would fail
        let provider = AlphaVantageProvider::with_base_url("test_key".to_string(), "http://0.0.0.0:1/");
        let results = provider.lookup("a").await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_provider_id() {
        let provider = AlphaVantageProvider::new("test_key".to_string());
        assert_eq!(QuoteProvider::id(&provider), "ALPHA_VANTAGE");
        assert_eq!(InstrumentDirectory::id(&provider), "ALPHA_VANTAGE");
    }
}
