//! Request DTOs for API endpoints.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use tavola_core::SearchCriteria;

/// Query parameters for restaurant search.
///
/// Validation (ranges, the location/page_token invariant) happens in the
/// search service, before any outbound call; this type only carries the raw
/// parameters off the wire.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Location string (e.g. "New York, NY") or "lat,lng" coordinates
    #[param(example = "New York, NY")]
    pub location: Option<String>,

    /// Cuisine type filter (e.g. "italian", "chinese", "mexican")
    #[param(example = "italian")]
    pub cuisine: Option<String>,

    /// Minimum rating threshold (0-5)
    #[param(example = 4.0)]
    pub min_rating: Option<f64>,

    /// Minimum number of reviews
    #[param(example = 100)]
    pub min_reviews: Option<u32>,

    /// Price level (0-4, where 0 is free and 4 is very expensive), exact match
    #[param(example = 2)]
    pub price_level: Option<u8>,

    /// Only return restaurants that are currently open
    pub open_now: Option<bool>,

    /// Search radius in meters (max 50000)
    #[param(example = 5000)]
    pub radius: Option<u32>,

    /// ISO 3166-1 Alpha-2 country code (e.g. "us", "uk", "fr") to bias results
    #[param(example = "us")]
    pub country: Option<String>,

    /// Token to fetch the next page of a previous search
    pub page_token: Option<String>,
}

impl From<SearchQuery> for SearchCriteria {
    fn from(q: SearchQuery) -> Self {
        Self {
            location: q.location,
            cuisine: q.cuisine,
            min_rating: q.min_rating,
            min_reviews: q.min_reviews,
            price_level: q.price_level,
            open_now: q.open_now,
            radius: q.radius,
            country: q.country,
            page_token: q.page_token,
        }
    }
}
