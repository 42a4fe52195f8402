use axum::{Json, extract::State};

use crate::AppState;
use crate::models::price::HealthResponse;

/// Handler for GET /health
///
/// Probes store connectivity with a trivial query. A broken database is
/// reported in the body, not as an HTTP error.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        }),
        Err(e) => Json(HealthResponse {
            status: "unhealthy".to_string(),
            database: e.to_string(),
        }),
    }
}
