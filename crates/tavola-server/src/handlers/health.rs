//! Health check endpoints.

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, RootResponse};
use crate::state::AppState;

/// Root endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = RootResponse),
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Tavola Restaurant Search API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Health check endpoint.
///
/// Reports whether the upstream API key is configured; the service can be
/// healthy-but-degraded when it is not.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        google_maps_configured: state.places_configured(),
    })
}
