//! Dashboard service.
//!
//! Owns the instrument set, the watchlist and the search resolver, and is the
//! only place where they are mutated. Each public operation takes the locks it
//! needs for the duration of one synchronous step; no guard is ever held
//! across an `.await`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::constants::QUOTE_RETRY_BACKOFF;
use crate::demo::{self, DEFAULT_WATCHLIST};
use crate::errors::{Result, ValidationError};
use crate::instruments::{normalize_symbol, Instrument, InstrumentError, InstrumentSet, MergeCandidate};
use crate::market_data::{
    DirectoryEntry, InstrumentDirectory, MarketDataError, Quote, QuoteProvider, RetryClass,
};
use crate::search::{SearchEventSink, SearchResolver, SearchState};
use crate::views::{self, DashboardSummary, DashboardViews};
use crate::watchlist::Watchlist;

use super::dashboard_traits::DashboardServiceTrait;
use super::RefreshReport;

#[derive(Debug, Default)]
struct Status {
    last_error: Option<String>,
    loading: bool,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

pub struct DashboardService {
    config: DashboardConfig,
    instruments: RwLock<InstrumentSet>,
    watchlist: RwLock<Watchlist>,
    status: RwLock<Status>,
    resolver: SearchResolver,
    quotes: Option<Arc<dyn QuoteProvider>>,
}

impl DashboardService {
    /// Creates an empty dashboard.
    ///
    /// Without a quote provider, added instruments are placeholders and
    /// [`refresh_quotes`](DashboardServiceTrait::refresh_quotes) does nothing.
    pub fn new(
        config: DashboardConfig,
        directory: Arc<dyn InstrumentDirectory>,
        quotes: Option<Arc<dyn QuoteProvider>>,
        sink: Arc<dyn SearchEventSink>,
    ) -> Result<Self> {
        config.validate()?;

        let resolver = SearchResolver::new(directory, &config, sink);
        Ok(Self {
            instruments: RwLock::new(InstrumentSet::new(config.placeholder_sector.clone())),
            watchlist: RwLock::new(Watchlist::new()),
            status: RwLock::new(Status::default()),
            resolver,
            quotes,
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn set_error(&self, message: String) {
        write(&self.status).last_error = Some(message);
    }

    fn set_loading(&self, loading: bool) {
        write(&self.status).loading = loading;
    }

    /// Fetches a quote, retrying once after a pause on transient failures.
    async fn fetch_quote(
        provider: &dyn QuoteProvider,
        symbol: &str,
    ) -> std::result::Result<Quote, MarketDataError> {
        match provider.fetch_quote(symbol).await {
            Err(e) if e.retry_class() == RetryClass::WithBackoff => {
                debug!("Retrying quote for {} after: {}", symbol, e);
                tokio::time::sleep(QUOTE_RETRY_BACKOFF).await;
                provider.fetch_quote(symbol).await
            }
            result => result,
        }
    }

    /// Builds the record to merge for `entry`.
    async fn resolve_candidate(&self, entry: DirectoryEntry) -> MergeCandidate {
        let Some(provider) = self.quotes.as_deref() else {
            return entry.into();
        };

        let symbol = normalize_symbol(&entry.symbol);
        match Self::fetch_quote(provider, &symbol).await {
            Ok(quote) => {
                let name = if entry.name.trim().is_empty() {
                    demo::company_name(&symbol)
                } else {
                    entry.name.trim().to_string()
                };
                let sector = demo::known_sector(&symbol)
                    .map(str::to_string)
                    .unwrap_or_else(|| self.config.placeholder_sector.clone());
                Instrument::from_quote(&quote, name, sector).into()
            }
            Err(e) => {
                warn!(
                    "Quote for {} unavailable from {}, adding placeholder: {}",
                    symbol,
                    provider.id(),
                    e
                );
                entry.into()
            }
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    fn load(&self, instruments: Vec<Instrument>) {
        write(&self.instruments).load(instruments);
        write(&self.status).last_error = None;
    }

    fn load_demo(&self) {
        self.load(demo::demo_instruments());
        *write(&self.watchlist) = Watchlist::from_symbols(DEFAULT_WATCHLIST.iter().copied());
        info!("Loaded sample dashboard data");
    }

    fn instruments(&self) -> Vec<Instrument> {
        read(&self.instruments).all().to_vec()
    }

    async fn add_candidate(&self, entry: DirectoryEntry) -> Result<Instrument> {
        let symbol = normalize_symbol(&entry.symbol);
        if symbol.is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }

        // Duplicates are rejected before any quote fetch.
        if read(&self.instruments).contains(&symbol) {
            let err = InstrumentError::DuplicateSymbol { symbol };
            self.set_error(err.to_string());
            return Err(err.into());
        }

        self.set_loading(true);
        let candidate = self.resolve_candidate(entry).await;
        self.set_loading(false);

        let merged = write(&self.instruments).merge(candidate);
        match merged {
            Ok(instrument) => {
                write(&self.status).last_error = None;
                self.resolver.clear();
                Ok(instrument)
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err.into())
            }
        }
    }

    fn remove_instrument(&self, symbol: &str) -> bool {
        write(&self.instruments).remove(symbol)
    }

    async fn refresh_quotes(&self) -> Result<RefreshReport> {
        let Some(provider) = self.quotes.as_deref() else {
            debug!("No quote provider configured, skipping refresh");
            return Ok(RefreshReport::default());
        };

        let tracked = self.instruments();
        self.set_loading(true);
        let mut report = RefreshReport::default();

        for current in tracked {
            match Self::fetch_quote(provider, &current.symbol).await {
                Ok(quote) => {
                    let mut refreshed =
                        Instrument::from_quote(&quote, current.name.clone(), current.sector.clone());
                    refreshed.symbol = current.symbol.clone();

                    let replaced = write(&self.instruments).replace(refreshed);
                    match replaced {
                        Ok(_) => report.updated.push(current.symbol),
                        Err(InstrumentError::NotFound(symbol)) => {
                            debug!("{} was removed during refresh", symbol);
                        }
                        Err(e) => {
                            warn!("Rejected refreshed quote for {}: {}", current.symbol, e);
                            report.failed.push(current.symbol);
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to refresh {}: {}", current.symbol, e);
                    report.failed.push(current.symbol);
                }
            }
        }

        {
            let mut status = write(&self.status);
            status.loading = false;
            status.last_error = if report.failed.is_empty() {
                None
            } else {
                Some(format!(
                    "Failed to refresh quotes for {}",
                    report.failed.join(", ")
                ))
            };
        }

        info!(
            "Quote refresh finished: {} updated, {} failed",
            report.updated.len(),
            report.failed.len()
        );
        Ok(report)
    }

    fn watchlist(&self) -> Vec<String> {
        read(&self.watchlist).symbols().to_vec()
    }

    fn add_to_watchlist(&self, symbol: &str) -> Result<bool> {
        let instruments = read(&self.instruments);
        if !instruments.contains(symbol) {
            return Err(InstrumentError::NotFound(normalize_symbol(symbol)).into());
        }
        Ok(write(&self.watchlist).add(symbol))
    }

    fn remove_from_watchlist(&self, symbol: &str) -> bool {
        write(&self.watchlist).remove(symbol)
    }

    fn on_query_change(&self, text: &str) {
        self.resolver.on_query_change(text);
    }

    fn search_state(&self) -> SearchState {
        self.resolver.state()
    }

    fn last_error(&self) -> Option<String> {
        read(&self.status).last_error.clone()
    }

    fn clear_error(&self) {
        write(&self.status).last_error = None;
    }

    fn views(&self) -> DashboardViews {
        let search = self.resolver.state();
        let instruments = read(&self.instruments);
        let watchlist = read(&self.watchlist);
        let status = read(&self.status);

        let all = instruments.all();
        let watchlist_rows = views::watchlist_rows(all, watchlist.symbols());
        let n = self.config.ranking_size;

        DashboardViews {
            summary: DashboardSummary {
                total_instruments: all.len(),
                watchlist_count: watchlist_rows.len(),
                search_active: search.is_active(),
                query: search.query.clone(),
                last_error: status.last_error.clone(),
                loading: status.loading,
            },
            breadth: views::counts(all),
            table_rows: views::table_rows(all, &search.query, search.is_active()),
            watchlist_rows,
            top_performers: views::top_performers(all, n),
            top_losers: views::top_losers(all, n),
            sector_allocation: views::sector_allocation(all),
        }
    }
}
