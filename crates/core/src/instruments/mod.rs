//! Instruments module - the tracked instrument set and its records.

mod instrument_set;
mod instruments_errors;
mod instruments_model;

#[cfg(test)]
mod instruments_model_tests;

pub use instrument_set::InstrumentSet;
pub use instruments_errors::InstrumentError;
pub use instruments_model::{normalize_symbol, Instrument, MergeCandidate, QuoteStatus, Volume};
