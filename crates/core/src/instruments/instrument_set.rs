//! The authoritative collection of tracked instruments.

use std::collections::HashSet;

use log::{debug, info};

use crate::constants::DEFAULT_SECTOR;

use super::instruments_errors::InstrumentError;
use super::instruments_model::{normalize_symbol, Instrument, MergeCandidate};

/// Ordered, symbol-unique set of instruments.
///
/// Every mutating call either fully applies or leaves the set untouched.
/// `version` increases on each successful mutation so callers can detect
/// change without diffing.
#[derive(Debug, Clone)]
pub struct InstrumentSet {
    instruments: Vec<Instrument>,
    placeholder_sector: String,
    version: u64,
}

impl Default for InstrumentSet {
    fn default() -> Self {
        Self::new(DEFAULT_SECTOR)
    }
}

impl InstrumentSet {
    /// Empty set; `placeholder_sector` is used when synthesizing from directory entries.
    pub fn new(placeholder_sector: impl Into<String>) -> Self {
        Self {
            instruments: Vec::new(),
            placeholder_sector: placeholder_sector.into(),
            version: 0,
        }
    }

    /// Replaces the set wholesale.
    ///
    /// Symbols are normalized; if the input repeats a symbol only the first
    /// record is kept.
    pub fn load(&mut self, initial: Vec<Instrument>) {
        let mut seen: HashSet<String> = HashSet::new();
        let total = initial.len();

        self.instruments = initial
            .into_iter()
            .map(|mut instrument| {
                instrument.symbol = normalize_symbol(&instrument.symbol);
                instrument
            })
            .filter(|instrument| seen.insert(instrument.symbol.clone()))
            .collect();
        self.version += 1;

        if self.instruments.len() < total {
            debug!(
                "Dropped {} duplicate instrument(s) while loading",
                total - self.instruments.len()
            );
        }
        debug!("Loaded {} instrument(s)", self.instruments.len());
    }

    /// Appends a new instrument.
    ///
    /// Fails with [`InstrumentError::DuplicateSymbol`] if the symbol is already
    /// tracked, or [`InstrumentError::Invalid`] if the record breaks an
    /// invariant. Neither failure mutates the set.
    pub fn merge(&mut self, candidate: impl Into<MergeCandidate>) -> Result<Instrument, InstrumentError> {
        let candidate = candidate.into();
        let symbol = candidate.symbol();

        if self.contains(&symbol) {
            info!("Rejected merge of {}: already tracked", symbol);
            return Err(InstrumentError::DuplicateSymbol { symbol });
        }

        let instrument = match candidate {
            MergeCandidate::Directory(entry) => Instrument::placeholder(&entry, &self.placeholder_sector),
            MergeCandidate::Instrument(mut instrument) => {
                instrument.symbol = symbol;
                instrument
            }
        };
        instrument.validate()?;

        self.instruments.push(instrument.clone());
        self.version += 1;
        info!("Merged {} into the instrument set", instrument.symbol);

        Ok(instrument)
    }

    /// Removes `symbol` if present; returns whether anything was removed.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        let before = self.instruments.len();
        self.instruments.retain(|i| i.symbol != symbol);

        let removed = self.instruments.len() < before;
        if removed {
            self.version += 1;
            info!("Removed {} from the instrument set", symbol);
        }
        removed
    }

    /// Full-record replacement, keeping the record's position.
    ///
    /// Returns the previous record.
    pub fn replace(&mut self, instrument: Instrument) -> Result<Instrument, InstrumentError> {
        let mut instrument = instrument;
        instrument.symbol = normalize_symbol(&instrument.symbol);
        instrument.validate()?;

        let slot = self
            .instruments
            .iter_mut()
            .find(|i| i.symbol == instrument.symbol)
            .ok_or_else(|| InstrumentError::NotFound(instrument.symbol.clone()))?;

        let previous = std::mem::replace(slot, instrument);
        self.version += 1;
        Ok(previous)
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        let symbol = normalize_symbol(symbol);
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// All instruments in insertion order.
    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn symbols(&self) -> Vec<String> {
        self.instruments.iter().map(|i| i.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
