use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::{
    error::ApiResult,
    events::{ServerEvent, WATCHLIST_CHANGED},
    main_lib::AppState,
};

async fn get_watchlist(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.dashboard.watchlist())
}

/// Idempotent: adding a symbol twice is not an error.
async fn add_to_watchlist(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.dashboard.add_to_watchlist(&symbol)? {
        state.event_bus.publish(ServerEvent::new(WATCHLIST_CHANGED));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_from_watchlist(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    if state.dashboard.remove_from_watchlist(&symbol) {
        state.event_bus.publish(ServerEvent::new(WATCHLIST_CHANGED));
    }
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/watchlist", get(get_watchlist))
        .route(
            "/watchlist/{symbol}",
            put(add_to_watchlist).delete(remove_from_watchlist),
        )
}
