//! Google Places API client: text search and per-place details lookups.

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use tavola_core::error::{AppError, PlacesErrorDetails};
use tavola_core::models::{
    Coordinates, PlaceDetails, Restaurant, RestaurantPage, TextSearchQuery,
};
use tavola_core::traits::PlacesProvider;
use tavola_core::HttpConfig;

/// Default base URL for the Places web service.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Fields requested by the details lookup: only what the open-now
/// confirmation step consumes.
const DETAILS_FIELDS: &str = "opening_hours,website,formatted_phone_number";

/// Response structure for the Places text-search endpoint.
///
/// The API signals failures in the body: `status` is `OK` or `ZERO_RESULTS`
/// on success, an error code otherwise, with optional `error_message` and
/// `error_details` alongside.
#[derive(Deserialize, Debug)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    next_page_token: Option<String>,
    error_message: Option<String>,
    error_details: Option<Value>,
}

/// Response structure for the Places details endpoint.
#[derive(Deserialize, Debug)]
struct DetailsResponse {
    status: String,
    result: Option<DetailsResult>,
}

#[derive(Deserialize, Debug, Default)]
struct DetailsResult {
    opening_hours: Option<Value>,
    website: Option<String>,
    formatted_phone_number: Option<String>,
}

impl From<DetailsResult> for PlaceDetails {
    fn from(r: DetailsResult) -> Self {
        Self {
            opening_hours: r.opening_hours,
            website: r.website,
            phone_number: r.formatted_phone_number,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct LatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Data Transfer Object for one place in a text-search response.
///
/// Field names follow the provider's schema; [`GooglePlacesClient::into_restaurant`]
/// renames them into the normalized [`Restaurant`] shape. Everything beyond
/// `place_id` and `name` is optional: the text-search endpoint returns a
/// sparse subset and richer fields only appear when the provider has them.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    pub photos: Option<Vec<Value>>,
    pub business_status: Option<String>,
    pub opening_hours: Option<Value>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub dine_in: Option<bool>,
    pub takeout: Option<bool>,
    pub delivery: Option<bool>,
    pub curbside_pickup: Option<bool>,
    pub reservable: Option<bool>,
    pub serves_breakfast: Option<bool>,
    pub serves_lunch: Option<bool>,
    pub serves_dinner: Option<bool>,
    pub serves_brunch: Option<bool>,
    pub serves_beer: Option<bool>,
    pub serves_wine: Option<bool>,
    pub serves_cocktails: Option<bool>,
    pub serves_coffee: Option<bool>,
    pub serves_vegetarian_food: Option<bool>,
    pub serves_dessert: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub live_music: Option<bool>,
    pub good_for_children: Option<bool>,
    pub good_for_groups: Option<bool>,
    pub good_for_watching_sports: Option<bool>,
    pub allows_dogs: Option<bool>,
    pub restroom: Option<bool>,
    pub menu_for_children: Option<bool>,
    pub parking_options: Option<Value>,
    pub payment_options: Option<Value>,
    pub google_maps_uri: Option<String>,
    pub icon_mask_base_uri: Option<String>,
    pub utc_offset_minutes: Option<i32>,
    pub current_opening_hours: Option<Value>,
    pub regular_opening_hours: Option<Value>,
    pub generative_summary: Option<String>,
    pub editorial_summary: Option<String>,
    pub reviews: Option<Vec<Value>>,
    pub review_summary: Option<Value>,
    pub price_range: Option<String>,
    pub international_phone_number: Option<String>,
    pub national_phone_number: Option<String>,
    pub plus_code: Option<Value>,
    pub viewport: Option<Value>,
    pub address_components: Option<Vec<Value>>,
    pub adr_format_address: Option<String>,
}

/// HTTP client for the Google Places API.
///
/// Wraps the two upstream operations the search pipeline needs: the
/// text-search endpoint and the per-place details endpoint. One client is
/// built at service start and shared across concurrent requests; `reqwest`'s
/// client is internally reference-counted and safe to clone.
///
/// # Security
///
/// The Places web service carries the API key as a query parameter, so error
/// messages produced here never include the request URL.
///
/// # Examples
///
/// ```no_run
/// use tavola_client::{GooglePlacesClient, DEFAULT_BASE_URL};
/// use tavola_core::TextSearchQuery;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GooglePlacesClient::new("your-api-key", DEFAULT_BASE_URL)?;
/// let page = client
///     .text_search(&TextSearchQuery::Fresh {
///         query: "restaurant in New York, NY".to_string(),
///         radius: None,
///         open_now: false,
///         region: None,
///     })
///     .await?;
/// println!("Found {} restaurants", page.restaurants.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    base_url: Url,
    api_key: String,
    timeout_secs: u64,
}

impl GooglePlacesClient {
    /// Creates a new Places client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the API key is blank and
    /// `AppError::InvalidUrl` when the base URL is malformed.
    pub fn new(api_key: &str, base_url_str: &str) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::Config(
                "GOOGLE_MAPS_API_KEY is not configured".to_string(),
            ));
        }

        // Url::join drops the last path segment unless the base ends in '/'.
        let normalized = if base_url_str.ends_with('/') {
            base_url_str.to_string()
        } else {
            format!("{base_url_str}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| AppError::InvalidUrl(base_url_str.to_string()))?;

        let http_config = HttpConfig::default();
        let client = Client::builder()
            .user_agent("Tavola/0.1 (restaurant-search)")
            .timeout(http_config.timeout)
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
            timeout_secs: http_config.timeout.as_secs(),
        })
    }

    /// Executes one text-search call.
    ///
    /// A fresh query carries the query text, the fixed `restaurant` type
    /// filter, and the optional radius/opennow/region hints. A continuation
    /// query carries only the token and the key; the provider forbids mixing
    /// pagination with fresh search parameters.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Places` when the upstream reports a non-success
    /// status, and a transport variant (`Timeout`, `Network`, `Client`) when
    /// the call itself fails. Failures are never retried.
    pub async fn text_search(&self, query: &TextSearchQuery) -> Result<RestaurantPage, AppError> {
        let url = self.search_url(query)?;
        let response = self.get(url).await?;

        let body: TextSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Client(e.to_string()))?;

        Self::page_from_response(body)
    }

    /// Fetches opening hours, website, and phone number for one place.
    ///
    /// Returns `Ok(None)` when the upstream reports a non-success status or
    /// omits the result payload; the caller treats that the same as a closed
    /// place. Transport failures still surface as errors.
    pub async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, AppError> {
        let mut url = self
            .base_url
            .join("details/json")
            .map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("place_id", place_id)
            .append_pair("key", &self.api_key)
            .append_pair("fields", DETAILS_FIELDS);

        let response = self.get(url).await?;

        let body: DetailsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self::details_from_response(body))
    }

    /// Issues a canned test search and returns the raw upstream payload.
    ///
    /// Used by the debug endpoint to validate key and billing configuration;
    /// the payload is passed through untouched so the caller sees exactly
    /// what the provider said.
    pub async fn probe(&self) -> Result<Value, AppError> {
        let mut url = self
            .base_url
            .join("textsearch/json")
            .map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("query", "restaurant in New York")
            .append_pair("key", &self.api_key)
            .append_pair("type", "restaurant");

        let response = self.get(url).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::Client(e.to_string()))
    }

    /// Builds the text-search request URL for the given query.
    fn search_url(&self, query: &TextSearchQuery) -> Result<Url, AppError> {
        let mut url = self
            .base_url
            .join("textsearch/json")
            .map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);

            match query {
                TextSearchQuery::NextPage { token } => {
                    pairs.append_pair("pagetoken", token);
                }
                TextSearchQuery::Fresh {
                    query,
                    radius,
                    open_now,
                    region,
                } => {
                    pairs.append_pair("query", query);
                    pairs.append_pair("type", "restaurant");
                    if let Some(radius) = radius {
                        pairs.append_pair("radius", &radius.to_string());
                    }
                    if *open_now {
                        pairs.append_pair("opennow", "true");
                    }
                    if let Some(region) = region {
                        pairs.append_pair("region", region);
                    }
                }
            }
        }

        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                AppError::Network(format!("Connection failed: {e}"))
            } else {
                AppError::Client(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Client(format!(
                "HTTP {} from Google Places API",
                status.as_u16()
            )));
        }

        Ok(response)
    }

    fn page_from_response(body: TextSearchResponse) -> Result<RestaurantPage, AppError> {
        match body.status.as_str() {
            // ZERO_RESULTS is a successful, empty page, not an error.
            "OK" | "ZERO_RESULTS" => Ok(RestaurantPage {
                restaurants: body
                    .results
                    .into_iter()
                    .map(Self::into_restaurant)
                    .collect(),
                next_page_token: body.next_page_token,
            }),
            _ => Err(AppError::Places(PlacesErrorDetails::new(
                body.status,
                body.error_message
                    .unwrap_or_else(|| "Unknown Google Maps API error".to_string()),
                body.error_details,
            ))),
        }
    }

    fn details_from_response(body: DetailsResponse) -> Option<PlaceDetails> {
        if body.status == "OK" {
            body.result.map(PlaceDetails::from)
        } else {
            None
        }
    }

    /// Converts a raw place result into the normalized [`Restaurant`] record.
    ///
    /// A straight field-for-field copy: nothing is computed, and missing
    /// optional fields stay absent. A coordinate pair is attached only when
    /// both latitude and longitude are present and non-zero; the provider
    /// emits 0.0 for places with no coordinate data, so a zero value is
    /// treated as absent.
    pub fn into_restaurant(place: PlaceResult) -> Restaurant {
        let location = place
            .geometry
            .as_ref()
            .and_then(|g| g.location)
            .and_then(|l| match (l.lat, l.lng) {
                (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => {
                    Some(Coordinates { lat, lng })
                }
                _ => None,
            });

        Restaurant {
            place_id: place.place_id,
            name: place.name,
            address: place.formatted_address,
            location,
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
            price_level: place.price_level,
            types: place.types,
            opening_hours: place.opening_hours,
            photos: place.photos,
            website: place.website,
            phone_number: place.formatted_phone_number,
            business_status: place.business_status,
            dine_in: place.dine_in,
            takeout: place.takeout,
            delivery: place.delivery,
            curbside_pickup: place.curbside_pickup,
            reservable: place.reservable,
            serves_breakfast: place.serves_breakfast,
            serves_lunch: place.serves_lunch,
            serves_dinner: place.serves_dinner,
            serves_brunch: place.serves_brunch,
            serves_beer: place.serves_beer,
            serves_wine: place.serves_wine,
            serves_cocktails: place.serves_cocktails,
            serves_coffee: place.serves_coffee,
            serves_vegetarian_food: place.serves_vegetarian_food,
            serves_dessert: place.serves_dessert,
            outdoor_seating: place.outdoor_seating,
            live_music: place.live_music,
            good_for_children: place.good_for_children,
            good_for_groups: place.good_for_groups,
            good_for_watching_sports: place.good_for_watching_sports,
            allows_dogs: place.allows_dogs,
            restroom: place.restroom,
            menu_for_children: place.menu_for_children,
            parking_options: place.parking_options,
            payment_options: place.payment_options,
            google_maps_uri: place.google_maps_uri,
            icon_mask_base_uri: place.icon_mask_base_uri,
            utc_offset_minutes: place.utc_offset_minutes,
            current_opening_hours: place.current_opening_hours,
            regular_opening_hours: place.regular_opening_hours,
            generative_summary: place.generative_summary,
            editorial_summary: place.editorial_summary,
            reviews: place.reviews,
            review_summary: place.review_summary,
            price_range: place.price_range,
            international_phone_number: place.international_phone_number,
            national_phone_number: place.national_phone_number,
            plus_code: place.plus_code,
            viewport: place.viewport,
            address_components: place.address_components,
            adr_format_address: place.adr_format_address,
        }
    }
}

impl PlacesProvider for GooglePlacesClient {
    async fn text_search(&self, query: &TextSearchQuery) -> Result<RestaurantPage, AppError> {
        GooglePlacesClient::text_search(self, query).await
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, AppError> {
        GooglePlacesClient::place_details(self, place_id).await
    }
}
