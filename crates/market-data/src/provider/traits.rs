//! Quote provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers that can price a single symbol.
///
/// Callers are expected to wrap calls with their own timeout/retry policy;
/// see [`MarketDataError::retry_class`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketdash_market_data::{MarketDataError, Quote, QuoteProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         Ok(Quote::new(symbol, dec!(100), dec!(0), dec!(0), self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ALPHA_VANTAGE".
    /// Used for logging and as the quote source.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for `symbol`.
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
