//! Core error types for the dashboard engine.
//!
//! No error here is fatal: every failed operation leaves the instrument set
//! and watchlist exactly as they were before the call.

use thiserror::Error;

use crate::instruments::InstrumentError;
use crate::market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Instrument(#[from] InstrumentError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_symbol_message_is_user_facing() {
        let err: Error = InstrumentError::DuplicateSymbol {
            symbol: "AAPL".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "AAPL is already in your dashboard");
    }

    #[test]
    fn test_market_data_error_wraps() {
        let err: Error = MarketDataError::SymbolNotFound("NOPE".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Market data operation failed: Symbol not found: NOPE"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err: Error = ValidationError::MissingField("symbol".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'symbol' is missing"
        );
    }
}
