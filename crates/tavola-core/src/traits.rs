//! Trait definitions for external dependencies.
//!
//! The search pipeline depends on the places provider only through the
//! [`PlacesProvider`] trait, enabling:
//!
//! - **Testability**: mock implementations for unit testing
//! - **Decoupling**: core business logic doesn't depend on a specific
//!   provider client

use std::future::Future;

use crate::error::AppError;
use crate::models::{PlaceDetails, RestaurantPage, TextSearchQuery};

/// Client for a places-lookup provider.
///
/// Implementations issue the two upstream operations the pipeline needs: a
/// text search resolving a free-text query into a ranked page of places, and
/// a per-place details lookup.
pub trait PlacesProvider: Send + Sync + Clone {
    /// Executes one text-search call and returns the mapped page.
    ///
    /// `OK` and `ZERO_RESULTS` upstream statuses are both success; the latter
    /// yields an empty page. Any other status is an error.
    fn text_search(
        &self,
        query: &TextSearchQuery,
    ) -> impl Future<Output = Result<RestaurantPage, AppError>> + Send;

    /// Fetches opening hours, website, and phone number for one place.
    ///
    /// Returns `Ok(None)` when the provider reports a non-success status for
    /// the place or omits the result payload.
    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<PlaceDetails>, AppError>> + Send;
}
