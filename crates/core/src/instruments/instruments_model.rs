//! Instrument domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;
use crate::market_data::{DirectoryEntry, Quote};

/// Canonical form of a ticker: trimmed, uppercase.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Traded volume, either a raw share count or a pre-formatted label ("45.2M").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Volume {
    Count(u64),
    Display(String),
}

impl Default for Volume {
    fn default() -> Self {
        Volume::Count(0)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Volume::Display(label) => f.write_str(label),
            Volume::Count(count) => {
                let digits = count.to_string();
                let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        grouped.push(',');
                    }
                    grouped.push(ch);
                }
                f.write_str(&grouped)
            }
        }
    }
}

/// Where an instrument's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    #[default]
    Live,
    Sample,
    /// Synthesized from directory metadata; numeric fields are zero.
    Placeholder,
}

/// A tracked financial instrument.
///
/// `symbol` is the identity; everything else may be stale. Records are
/// replaced whole, never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub volume: Volume,
    pub sector: String,
    #[serde(default)]
    pub quote_status: QuoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Instrument {
    /// Create an instrument with zeroed quote fields.
    pub fn new(symbol: &str, name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            symbol: normalize_symbol(symbol),
            name: name.into(),
            price: Decimal::ZERO,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            volume: Volume::default(),
            sector: sector.into(),
            quote_status: QuoteStatus::Live,
            updated_at: None,
        }
    }

    /// Set price, absolute change and percentage change.
    pub fn with_quote(mut self, price: Decimal, change: Decimal, change_percent: Decimal) -> Self {
        self.price = price;
        self.change = change;
        self.change_percent = change_percent;
        self
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_status(mut self, status: QuoteStatus) -> Self {
        self.quote_status = status;
        self
    }

    /// Synthesize a clearly-marked placeholder from directory metadata.
    ///
    /// Used when no live quote is available: all numeric fields are zero and
    /// `quote_status` is [`QuoteStatus::Placeholder`].
    pub fn placeholder(entry: &DirectoryEntry, sector: &str) -> Self {
        let symbol = normalize_symbol(&entry.symbol);
        let name = if entry.name.trim().is_empty() {
            format!("{} Corp.", symbol)
        } else {
            entry.name.trim().to_string()
        };

        Self::new(&symbol, name, sector).with_status(QuoteStatus::Placeholder)
    }

    /// Build a live record from a fetched quote.
    pub fn from_quote(quote: &Quote, name: impl Into<String>, sector: impl Into<String>) -> Self {
        let mut instrument = Self::new(&quote.symbol, name, sector)
            .with_quote(
                quote.price.round_dp(DISPLAY_DECIMAL_PRECISION),
                quote.change.round_dp(DISPLAY_DECIMAL_PRECISION),
                quote.change_percent.round_dp(DISPLAY_DECIMAL_PRECISION),
            )
            .with_volume(Volume::Count(quote.volume));
        instrument.updated_at = Some(Utc::now());
        instrument
    }

    pub fn is_gainer(&self) -> bool {
        self.change_percent > Decimal::ZERO
    }

    pub fn is_loser(&self) -> bool {
        self.change_percent < Decimal::ZERO
    }

    /// Checks the invariants every tracked record must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "price for {} must not be negative",
                self.symbol
            )));
        }
        Ok(())
    }
}

/// Anything that can be merged into the instrument set.
#[derive(Debug, Clone)]
pub enum MergeCandidate {
    /// Directory metadata only; a placeholder record is synthesized.
    Directory(DirectoryEntry),
    /// A complete record (e.g. built from a live quote).
    Instrument(Instrument),
}

impl MergeCandidate {
    pub fn symbol(&self) -> String {
        match self {
            MergeCandidate::Directory(entry) => normalize_symbol(&entry.symbol),
            MergeCandidate::Instrument(instrument) => normalize_symbol(&instrument.symbol),
        }
    }
}

impl From<DirectoryEntry> for MergeCandidate {
    fn from(entry: DirectoryEntry) -> Self {
        MergeCandidate::Directory(entry)
    }
}

impl From<Instrument> for MergeCandidate {
    fn from(instrument: Instrument) -> Self {
        MergeCandidate::Instrument(instrument)
    }
}
