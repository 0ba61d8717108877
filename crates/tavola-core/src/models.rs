//! Domain models for restaurant search.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppError;

/// Maximum search radius accepted by the Places API, in meters.
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Maximum rating on the Places scale.
pub const MAX_RATING: f64 = 5.0;

/// Maximum price level (0 = free, 4 = very expensive).
pub const MAX_PRICE_LEVEL: u8 = 4;

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Normalized restaurant record.
///
/// Every field is a verbatim copy of the corresponding Places API field; none
/// is computed. Optional fields that the provider did not supply serialize as
/// absent, never as placeholder values. A record is constructed once per raw
/// place result and mutated at most once, when the open-now confirmation step
/// attaches freshly fetched opening hours, website, and phone number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    /// Google Places ID.
    pub place_id: String,
    /// Restaurant name.
    pub name: String,
    /// Formatted address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Geographic coordinates, when the provider supplied both latitude and
    /// longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// Average rating (0.0–5.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Total number of reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    /// Price level (0–4).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Place types in the provider's vocabulary, in provider order.
    #[serde(default)]
    pub types: Vec<String>,
    /// Opening hours payload, opaque provider structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub opening_hours: Option<Value>,
    /// Photo references.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub photos: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,

    // Service options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dine_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curbside_pickup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,

    // Dining times
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_breakfast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_lunch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_dinner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_brunch: Option<bool>,

    // Beverages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_beer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_wine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_cocktails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_coffee: Option<bool>,

    // Food types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_vegetarian_food: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_dessert: Option<bool>,

    // Amenities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdoor_seating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_music: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_for_children: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_for_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_for_watching_sports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_dogs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restroom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_for_children: Option<bool>,

    // Parking & payment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub parking_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub payment_options: Option<Value>,

    // Additional info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_mask_base_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub current_opening_hours: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub regular_opening_hours: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generative_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_summary: Option<String>,

    // Reviews
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub reviews: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub review_summary: Option<Value>,

    // Price & phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_phone_number: Option<String>,

    // Location details
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub plus_code: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub viewport: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub address_components: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adr_format_address: Option<String>,
}

/// Extended per-place fields returned by a details lookup.
///
/// Only the three fields the open-now confirmation step requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub opening_hours: Option<Value>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
}

impl PlaceDetails {
    /// Whether the opening-hours payload reports the place as currently open.
    ///
    /// Anything other than an explicit `"open_now": true` counts as closed.
    pub fn is_open_now(&self) -> bool {
        self.opening_hours
            .as_ref()
            .and_then(|hours| hours.get("open_now"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// One page of restaurant results in provider ranking order.
#[derive(Debug, Clone, Default)]
pub struct RestaurantPage {
    pub restaurants: Vec<Restaurant>,
    /// Continuation token, present only when more pages exist.
    pub next_page_token: Option<String>,
}

/// Search parameters accepted by the search pipeline.
///
/// All fields are optional at the type level; [`SearchCriteria::validated`]
/// enforces the cross-field invariant (exactly one of `location` and
/// `page_token`) and the per-field ranges before any outbound call is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchCriteria {
    /// Location string (e.g. "New York, NY") or "lat,lng" coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Cuisine term appended to the query text (e.g. "italian").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Minimum rating threshold (0.0–5.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Minimum number of reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_reviews: Option<u32>,
    /// Price level (0–4), matched exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Only return restaurants that are currently open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Search radius in meters (1–50000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// ISO 3166-1 alpha-2 country code to bias results, lower-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Opaque continuation token from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl SearchCriteria {
    /// Validates and normalizes the criteria.
    ///
    /// Normalization trims `location` and lower-cases `country`. Returns
    /// [`AppError::Validation`] when the cross-field invariant or a per-field
    /// range is violated; validation failures never reach the query builder.
    pub fn validated(mut self) -> Result<Self, AppError> {
        if let Some(location) = &self.location {
            let trimmed = location.trim();
            if trimmed.is_empty() {
                return Err(AppError::Validation("Location cannot be empty".into()));
            }
            self.location = Some(trimmed.to_string());
        }

        match (&self.location, &self.page_token) {
            (None, None) => {
                return Err(AppError::Validation(
                    "Either 'location' or 'page_token' must be provided".into(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "'location' and 'page_token' are mutually exclusive".into(),
                ));
            }
            _ => {}
        }

        if let Some(rating) = self.min_rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(AppError::Validation(format!(
                    "min_rating must be between 0.0 and {MAX_RATING}, got {rating}"
                )));
            }
        }

        if let Some(level) = self.price_level {
            if level > MAX_PRICE_LEVEL {
                return Err(AppError::Validation(format!(
                    "price_level must be between 0 and {MAX_PRICE_LEVEL}, got {level}"
                )));
            }
        }

        if let Some(radius) = self.radius {
            if !(1..=MAX_RADIUS_METERS).contains(&radius) {
                return Err(AppError::Validation(format!(
                    "radius must be between 1 and {MAX_RADIUS_METERS} meters, got {radius}"
                )));
            }
        }

        if let Some(country) = &self.country {
            if country.chars().count() != 2 {
                return Err(AppError::Validation(format!(
                    "country must be a 2-letter ISO 3166-1 code, got '{country}'"
                )));
            }
            self.country = Some(country.to_lowercase());
        }

        Ok(self)
    }
}

/// Outbound query for one Places text-search call.
///
/// The two variants are mutually exclusive by construction: the provider
/// forbids mixing a continuation token with fresh search parameters, so a
/// paginated request carries only the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSearchQuery {
    /// A fresh search built from structured criteria.
    Fresh {
        /// Full query text, e.g. `restaurant italian in New York, NY`.
        query: String,
        /// Radius hint in meters.
        radius: Option<u32>,
        /// Ask the provider to prefer currently open places. This is an
        /// upstream hint only; the authoritative open check is the per-place
        /// details confirmation.
        open_now: bool,
        /// Country bias, lower-cased ISO 3166-1 alpha-2.
        region: Option<String>,
    },
    /// Resume a prior search via its continuation token.
    NextPage { token: String },
}

impl TextSearchQuery {
    /// Builds the outbound query from validated criteria.
    ///
    /// The query text is the literal concatenation `restaurant` + cuisine (if
    /// present) + `in <location>`, joined by single spaces.
    pub fn from_criteria(criteria: &SearchCriteria) -> Result<Self, AppError> {
        if let Some(token) = &criteria.page_token {
            return Ok(Self::NextPage {
                token: token.clone(),
            });
        }

        let location = criteria.location.as_deref().ok_or_else(|| {
            AppError::Validation("Location is required when page_token is not provided".into())
        })?;

        let mut query_parts = vec!["restaurant".to_string()];
        if let Some(cuisine) = &criteria.cuisine {
            query_parts.push(cuisine.clone());
        }
        query_parts.push(format!("in {location}"));

        Ok(Self::Fresh {
            query: query_parts.join(" "),
            radius: criteria.radius,
            open_now: criteria.open_now.unwrap_or(false),
            region: criteria.country.clone(),
        })
    }
}
