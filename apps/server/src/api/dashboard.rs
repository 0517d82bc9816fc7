use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::{delete, get}, Json, Router};
use marketdash_core::{
    demo::{market_indices, MarketIndex},
    views::DashboardViews,
};

use crate::main_lib::AppState;

async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardViews> {
    Json(state.dashboard.views())
}

/// Dismisses the user-visible error banner.
async fn clear_error(State(state): State<Arc<AppState>>) -> StatusCode {
    state.dashboard.clear_error();
    StatusCode::NO_CONTENT
}

async fn get_market_indices() -> Json<Vec<MarketIndex>> {
    Json(market_indices())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/error", delete(clear_error))
        .route("/market/indices", get(get_market_indices))
}
