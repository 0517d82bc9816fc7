use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use marketdash_core::{instruments::Instrument, RefreshReport};
use marketdash_market_data::DirectoryEntry;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    events::{ServerEvent, INSTRUMENTS_CHANGED, QUOTES_REFRESHED},
    main_lib::AppState,
};

/// A directory candidate as posted by the client; only `symbol` is required.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddInstrumentBody {
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    asset_type: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    currency: Option<String>,
}

impl From<AddInstrumentBody> for DirectoryEntry {
    fn from(body: AddInstrumentBody) -> Self {
        DirectoryEntry::new(
            body.symbol,
            body.name,
            body.asset_type.unwrap_or_else(|| "Equity".to_string()),
            body.region.unwrap_or_else(|| "United States".to_string()),
            body.currency.unwrap_or_else(|| "USD".to_string()),
        )
    }
}

async fn list_instruments(State(state): State<Arc<AppState>>) -> Json<Vec<Instrument>> {
    Json(state.dashboard.instruments())
}

async fn add_instrument(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddInstrumentBody>,
) -> ApiResult<(StatusCode, Json<Instrument>)> {
    let instrument = state.dashboard.add_candidate(body.into()).await?;
    state.event_bus.publish(ServerEvent::new(INSTRUMENTS_CHANGED));
    Ok((StatusCode::CREATED, Json(instrument)))
}

async fn remove_instrument(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if !state.dashboard.remove_instrument(&symbol) {
        return Err(ApiError::NotFound(format!("{} is not in your dashboard", symbol)));
    }
    state.event_bus.publish(ServerEvent::new(INSTRUMENTS_CHANGED));
    Ok(StatusCode::NO_CONTENT)
}

async fn refresh_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<RefreshReport>> {
    let report = state.dashboard.refresh_quotes().await?;
    if let Ok(payload) = serde_json::to_value(&report) {
        state
            .event_bus
            .publish(ServerEvent::with_payload(QUOTES_REFRESHED, payload));
    }
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/instruments", get(list_instruments).post(add_instrument))
        .route("/instruments/refresh", post(refresh_quotes))
        .route("/instruments/{symbol}", delete(remove_instrument))
}
