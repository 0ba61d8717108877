//! Tavola Client - HTTP client for the Google Places API
//!
//! This crate provides the outbound half of the search pipeline:
//!
//! - [`places`] - text search and per-place details lookups
//!
//! # Overview
//!
//! [`GooglePlacesClient`] handles request building, response parsing, and
//! error mapping for the Places web service, and implements the
//! `tavola_core::traits::PlacesProvider` trait consumed by the search
//! service.

pub mod places;

// Re-export main client types
pub use places::{GooglePlacesClient, DEFAULT_BASE_URL};
