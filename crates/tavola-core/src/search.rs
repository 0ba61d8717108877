//! Restaurant search service: query building, client-side filtering, and
//! open-now confirmation.
//!
//! # Architecture
//!
//! [`SearchService`] is generic over [`PlacesProvider`], keeping the pipeline
//! testable against mock providers and independent of the concrete HTTP
//! client. One search call performs:
//!
//! 1. Validation (invalid parameter sets never produce an outbound call)
//! 2. One text-search call (fresh query or continuation token)
//! 3. Client-side filtering by rating, review count, and exact price level
//!    (the provider's API does not support these natively)
//! 4. When `open_now` was requested, one details lookup per surviving record
//!    to confirm live open status and attach fresh contact fields
//!
//! There are no retries and no partial-result recovery: a text-search failure
//! fails the whole call, while a details-lookup failure only drops that one
//! record.

use futures::future::join_all;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Restaurant, SearchCriteria, TextSearchQuery};
use crate::traits::PlacesProvider;

/// Result of one search call.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching restaurants in provider ranking order.
    pub restaurants: Vec<Restaurant>,
    /// The effective (validated, normalized) parameters used.
    pub criteria: SearchCriteria,
    /// Continuation token, present only when more pages exist.
    pub next_page_token: Option<String>,
}

/// Search service over an injected places provider.
#[derive(Clone)]
pub struct SearchService<P: PlacesProvider> {
    provider: P,
}

impl<P: PlacesProvider> SearchService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Searches for restaurants matching the given criteria.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed parameters (before any
    /// outbound call) and [`AppError::Places`] or a transport error when the
    /// upstream call cannot be completed.
    pub async fn search(&self, criteria: SearchCriteria) -> Result<SearchOutcome, AppError> {
        let criteria = criteria.validated()?;
        let query = TextSearchQuery::from_criteria(&criteria)?;

        let page = self.provider.text_search(&query).await?;

        let mut restaurants: Vec<Restaurant> = page
            .restaurants
            .into_iter()
            .filter(|r| {
                matches_filters(
                    r,
                    criteria.min_rating,
                    criteria.min_reviews,
                    criteria.price_level,
                )
            })
            .collect();

        if criteria.open_now.unwrap_or(false) && !restaurants.is_empty() {
            restaurants = self.confirm_open(restaurants).await;
        }

        Ok(SearchOutcome {
            restaurants,
            criteria,
            next_page_token: page.next_page_token,
        })
    }

    /// Confirms live open status for each record via a details lookup.
    ///
    /// Lookups are independent, so they are issued as an ordered fan-out; the
    /// output preserves provider ranking. A failed lookup or a non-open
    /// answer drops that one record and is never surfaced as a request-level
    /// error.
    async fn confirm_open(&self, restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
        let lookups = restaurants.into_iter().map(|mut restaurant| {
            let provider = self.provider.clone();
            async move {
                match provider.place_details(&restaurant.place_id).await {
                    Ok(Some(details)) if details.is_open_now() => {
                        restaurant.opening_hours = details.opening_hours;
                        restaurant.website = details.website;
                        restaurant.phone_number = details.phone_number;
                        Some(restaurant)
                    }
                    Ok(_) => None,
                    Err(err) => {
                        debug!(
                            place_id = %restaurant.place_id,
                            error = %err,
                            "Dropping restaurant: details lookup failed"
                        );
                        None
                    }
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }
}

/// Checks a restaurant against the client-side filter thresholds.
///
/// The three checks are independent and AND-combined. An absent field always
/// fails an active threshold (a record without a rating does not pass
/// `min_rating=0.0`), and `price_level` is an exact match, not a ceiling.
pub fn matches_filters(
    restaurant: &Restaurant,
    min_rating: Option<f64>,
    min_reviews: Option<u32>,
    price_level: Option<u8>,
) -> bool {
    if let Some(min_rating) = min_rating {
        match restaurant.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    if let Some(min_reviews) = min_reviews {
        match restaurant.user_ratings_total {
            Some(total) if total >= min_reviews => {}
            _ => return false,
        }
    }

    if let Some(price_level) = price_level {
        if restaurant.price_level != Some(price_level) {
            return false;
        }
    }

    true
}
