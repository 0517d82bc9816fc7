use std::sync::Arc;

use marketdash_core::{
    search::SearchEventSink, DashboardConfig, DashboardService, DashboardServiceTrait,
};
use marketdash_market_data::{
    AlphaVantageProvider, InstrumentDirectory, QuoteProvider, StaticDirectory,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::{Config, DirectoryKind},
    events::EventBus,
    search_events::WebSearchEventSink,
};

const EVENT_BUS_CAPACITY: usize = 256;

pub struct AppState {
    pub dashboard: Arc<dyn DashboardServiceTrait>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("MD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // `try_init` also installs the `log` bridge so library crates show up.
    let result = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    };
    if let Err(err) = result {
        eprintln!("Tracing already initialized: {}", err);
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let sink: Arc<dyn SearchEventSink> = Arc::new(WebSearchEventSink::new(event_bus.clone()));

    let alpha_vantage = config
        .alpha_vantage_api_key
        .clone()
        .map(|key| Arc::new(AlphaVantageProvider::new(key)));

    let directory: Arc<dyn InstrumentDirectory> = match (config.directory, &alpha_vantage) {
        (DirectoryKind::AlphaVantage, Some(provider)) => provider.clone(),
        _ => Arc::new(StaticDirectory::default()),
    };
    let quotes = alpha_vantage.map(|provider| provider as Arc<dyn QuoteProvider>);
    tracing::info!(
        "Directory: {}, live quotes: {}",
        directory.id(),
        if quotes.is_some() { "enabled" } else { "disabled" }
    );

    let dashboard_config = DashboardConfig {
        search_debounce_ms: config.search_debounce.as_millis() as u64,
        ..Default::default()
    };
    let dashboard = DashboardService::new(dashboard_config, directory, quotes, sink)?;
    dashboard.load_demo();

    Ok(Arc::new(AppState {
        dashboard: Arc::new(dashboard),
        event_bus,
    }))
}
