//! Events endpoint

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use hive_events_core::{Event, ResolverEvent};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", post(resolve_events))
        .route("/health", get(health))
}

/// POST /events - Resolve an events query
///
/// The body is the resolver event, `{"arguments": {...}}`.
async fn resolve_events(
    State(state): State<AppState>,
    Json(event): Json<ResolverEvent>,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events().handle(&event).await?;
    Ok(Json(events))
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
