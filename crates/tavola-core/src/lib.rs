//! Tavola Core - Domain types, business logic, and the search pipeline.
//!
//! This crate provides the core functionality for Tavola, including:
//!
//! - **Domain models**: [`Restaurant`], [`SearchCriteria`], [`RestaurantPage`]
//! - **Business logic**: client-side filtering and open-now confirmation
//! - **Services**: [`SearchService`] for the search/filter/enrich pipeline
//! - **Traits**: [`PlacesProvider`] for dependency injection
//!
//! # Architecture
//!
//! Business logic is decoupled from I/O through the [`PlacesProvider`] trait:
//! the concrete HTTP client lives in `tavola-client`, and the REST surface in
//! `tavola-server`. The pipeline itself owns no shared mutable state; each
//! search call owns its parameters and produces its own result list.

pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod traits;

// Configuration
pub use config::HttpConfig;

// Error handling
pub use error::{AppError, PlacesErrorDetails};

// Domain models
pub use models::{
    Coordinates, PlaceDetails, Restaurant, RestaurantPage, SearchCriteria, TextSearchQuery,
    MAX_PRICE_LEVEL, MAX_RADIUS_METERS, MAX_RATING,
};

// Traits for dependency injection
pub use traits::PlacesProvider;

// Services (generic over trait implementations)
pub use search::{matches_filters, SearchOutcome, SearchService};
