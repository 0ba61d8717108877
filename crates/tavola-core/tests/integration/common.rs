//! Test utilities and mock implementations for integration tests.
//!
//! Provides a mock [`PlacesProvider`] for testing `SearchService` in
//! isolation, with canned pages, per-place details replies, and call
//! counters to assert on outbound traffic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tavola_core::traits::PlacesProvider;
use tavola_core::{AppError, PlaceDetails, Restaurant, RestaurantPage, TextSearchQuery};

/// Canned reply for a `place_details` lookup.
#[derive(Clone)]
pub enum DetailsReply {
    /// Status OK with an `open_now: true` payload plus fresh contact fields.
    Open(PlaceDetails),
    /// Status OK but the place is not currently open.
    Closed,
    /// Status OK with no opening-hours payload at all.
    NoHours,
    /// Non-success status from the provider (lookup yields `Ok(None)`).
    Missing,
    /// Transport failure.
    Fail,
}

struct MockInner {
    /// Canned page, or (status, message) for a provider-reported failure.
    page: Result<RestaurantPage, (String, String)>,
    details: HashMap<String, DetailsReply>,
    text_search_calls: AtomicUsize,
    details_calls: AtomicUsize,
    last_query: Mutex<Option<TextSearchQuery>>,
}

/// Mock places provider with a single canned result page.
#[derive(Clone)]
pub struct MockPlacesProvider {
    inner: Arc<MockInner>,
}

impl MockPlacesProvider {
    pub fn new(page: RestaurantPage) -> Self {
        Self {
            inner: Arc::new(MockInner {
                page: Ok(page),
                details: HashMap::new(),
                text_search_calls: AtomicUsize::new(0),
                details_calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }),
        }
    }

    /// A provider whose text search fails with a `Places` error.
    pub fn failing(status: &str, message: &str) -> Self {
        Self {
            inner: Arc::new(MockInner {
                page: Err((status.to_string(), message.to_string())),
                details: HashMap::new(),
                text_search_calls: AtomicUsize::new(0),
                details_calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }),
        }
    }

    pub fn with_details(page: RestaurantPage, details: HashMap<String, DetailsReply>) -> Self {
        Self {
            inner: Arc::new(MockInner {
                page: Ok(page),
                details,
                text_search_calls: AtomicUsize::new(0),
                details_calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }),
        }
    }

    pub fn text_search_calls(&self) -> usize {
        self.inner.text_search_calls.load(Ordering::Relaxed)
    }

    pub fn details_calls(&self) -> usize {
        self.inner.details_calls.load(Ordering::Relaxed)
    }

    /// The query the last `text_search` call carried, if any.
    pub fn last_query(&self) -> Option<TextSearchQuery> {
        self.inner.last_query.lock().unwrap().clone()
    }
}

impl PlacesProvider for MockPlacesProvider {
    async fn text_search(&self, query: &TextSearchQuery) -> Result<RestaurantPage, AppError> {
        self.inner.text_search_calls.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_query.lock().unwrap() = Some(query.clone());

        match &self.inner.page {
            Ok(page) => Ok(page.clone()),
            Err((status, message)) => Err(AppError::Places(
                tavola_core::PlacesErrorDetails::new(status.clone(), message.clone(), None),
            )),
        }
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, AppError> {
        self.inner.details_calls.fetch_add(1, Ordering::Relaxed);

        match self.inner.details.get(place_id) {
            Some(DetailsReply::Open(details)) => Ok(Some(details.clone())),
            Some(DetailsReply::Closed) => Ok(Some(PlaceDetails {
                opening_hours: Some(serde_json::json!({"open_now": false})),
                website: None,
                phone_number: None,
            })),
            Some(DetailsReply::NoHours) => Ok(Some(PlaceDetails::default())),
            Some(DetailsReply::Missing) | None => Ok(None),
            Some(DetailsReply::Fail) => {
                Err(AppError::Network("Connection failed: mock".to_string()))
            }
        }
    }
}

/// Builds a minimal restaurant record for pipeline tests.
pub fn restaurant(place_id: &str, name: &str, rating: Option<f64>) -> Restaurant {
    Restaurant {
        place_id: place_id.to_string(),
        name: name.to_string(),
        rating,
        types: vec!["restaurant".to_string()],
        ..Default::default()
    }
}

/// An `open_now: true` details reply with replacement contact fields.
pub fn open_details(website: &str, phone: &str) -> DetailsReply {
    DetailsReply::Open(PlaceDetails {
        opening_hours: Some(serde_json::json!({
            "open_now": true,
            "weekday_text": ["Monday: 9:00 AM – 10:00 PM"],
        })),
        website: Some(website.to_string()),
        phone_number: Some(phone.to_string()),
    })
}
