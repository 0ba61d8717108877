//! Response DTOs for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use tavola_core::{Restaurant, SearchCriteria, SearchOutcome};

// =============================================================================
// Health
// =============================================================================

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Service name
    pub message: String,
    /// Server version
    pub version: String,
    /// Run status
    pub status: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Whether the upstream API key is configured
    pub google_maps_configured: bool,
}

// =============================================================================
// Search
// =============================================================================

/// Restaurant search response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Matching restaurants in provider ranking order
    pub restaurants: Vec<Restaurant>,
    /// Number of results in this page after filtering
    pub total_results: usize,
    /// The effective query parameters used (absent fields omitted)
    pub query: SearchCriteria,
    /// Token to fetch the next page, present only when more pages exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            total_results: outcome.restaurants.len(),
            restaurants: outcome.restaurants,
            query: outcome.criteria,
            next_page_token: outcome.next_page_token,
        }
    }
}
