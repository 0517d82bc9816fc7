use thiserror::Error;

use crate::errors::ValidationError;

/// Outcomes of instrument set operations that did not mutate the set.
#[derive(Error, Debug)]
pub enum InstrumentError {
    /// Merge attempted for a symbol that is already tracked.
    #[error("{symbol} is already in your dashboard")]
    DuplicateSymbol { symbol: String },

    /// Replacement attempted for a symbol that is not tracked.
    #[error("{0} is not in your dashboard")]
    NotFound(String),

    /// The record would break an instrument invariant.
    #[error("Invalid instrument: {0}")]
    Invalid(#[from] ValidationError),
}
