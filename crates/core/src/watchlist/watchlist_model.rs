use log::debug;
use serde::{Deserialize, Serialize};

use crate::instruments::normalize_symbol;

/// An insertion-ordered set of symbols.
///
/// Symbols do not have to be tracked in the instrument set; views simply
/// skip the ones that are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    symbols: Vec<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a watchlist from `symbols`, dropping blanks and repeats.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut watchlist = Self::new();
        for symbol in symbols {
            watchlist.add(symbol.as_ref());
        }
        watchlist
    }

    /// Adds `symbol` to the end of the list.
    ///
    /// Returns `false` when the symbol was already present or blank.
    pub fn add(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() || self.symbols.contains(&symbol) {
            return false;
        }
        debug!("Watching {}", symbol);
        self.symbols.push(symbol);
        true
    }

    /// Returns `false` when the symbol was not on the list.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        let before = self.symbols.len();
        self.symbols.retain(|s| *s != symbol);
        let removed = self.symbols.len() < before;
        if removed {
            debug!("Stopped watching {}", symbol);
        }
        removed
    }

    pub fn contains(&self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
