//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait used by the dashboard to fetch live quotes
//! - Concrete provider implementations (Alpha Vantage)
//!
//! Providers are injected as capabilities, so the dashboard core can be
//! exercised with in-memory fakes.

mod traits;

pub mod alpha_vantage;

pub use traits::QuoteProvider;
