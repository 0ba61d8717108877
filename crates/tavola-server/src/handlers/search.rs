//! Restaurant search endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{SearchQuery, SearchResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Search restaurants with advanced filters.
///
/// Forwards the query to the Places text search, applies the client-side
/// rating/review/price filters, and, when `open_now` is requested,
/// confirms live open status per result.
#[utoipa::path(
    get,
    path = "/restaurants/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Places API key not configured"),
        (status = 502, description = "Places API reported an error"),
    ),
    tag = "restaurants"
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Some(service) = &state.search_service else {
        return Err(ApiError::Internal(
            "Google Maps API is not configured. Please set GOOGLE_MAPS_API_KEY environment variable."
                .to_string(),
        ));
    };

    let outcome = service.search(params.into()).await.map_err(ApiError::from)?;

    Ok(Json(SearchResponse::from(outcome)))
}
