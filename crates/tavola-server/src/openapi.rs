//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{HealthResponse, RootResponse, SearchQuery, SearchResponse};
use crate::handlers::{debug, health, search};
use tavola_core::{Coordinates, Restaurant, SearchCriteria};

/// OpenAPI documentation for the Tavola API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tavola API",
        version = "0.1.0",
        description = "Restaurant search service backed by the Google Places API.

Forwards search requests to the Places text search, applies client-side
filters the upstream does not support natively (minimum rating, minimum
review count, exact price level), and optionally confirms live open status
per result.

## Quick Start

1. Check server health: `GET /health`
2. Search restaurants: `GET /restaurants/search?location=New+York,+NY&cuisine=italian&min_rating=4.0`
3. Fetch the next page: `GET /restaurants/search?page_token=<token>`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health::root,
        health::health_check,
        search::search_restaurants,
        debug::debug_google_maps,
    ),
    components(schemas(
        RootResponse,
        HealthResponse,
        SearchQuery,
        SearchResponse,
        SearchCriteria,
        Restaurant,
        Coordinates,
    )),
    tags(
        (name = "health", description = "Service health and metadata"),
        (name = "restaurants", description = "Restaurant search"),
        (name = "debug", description = "Upstream configuration diagnostics"),
    )
)]
pub struct ApiDoc;
