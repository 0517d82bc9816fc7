use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use marketdash_core::search::SearchState;
use serde::Deserialize;

use crate::main_lib::AppState;

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    query: String,
}

async fn get_search(State(state): State<Arc<AppState>>) -> Json<SearchState> {
    Json(state.dashboard.search_state())
}

/// Feeds the query to the debounced resolver and returns the state right
/// after scheduling. Resolved candidates arrive on the event stream.
async fn update_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Json<SearchState> {
    state.dashboard.on_query_change(&body.query);
    Json(state.dashboard.search_state())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(get_search).put(update_search))
}
