//! Integration tests for the SearchService pipeline.

use std::collections::HashMap;

use tavola_core::{AppError, RestaurantPage, SearchCriteria, SearchService, TextSearchQuery};

use crate::integration::common::{
    open_details, restaurant, DetailsReply, MockPlacesProvider,
};

fn criteria(location: &str) -> SearchCriteria {
    SearchCriteria {
        location: Some(location.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_invalid_criteria_issue_no_outbound_call() {
    // Arrange
    let provider = MockPlacesProvider::new(RestaurantPage::default());
    let service = SearchService::new(provider.clone());

    // Act
    let result = service.search(SearchCriteria::default()).await;

    // Assert
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(provider.text_search_calls(), 0);
    assert_eq!(provider.details_calls(), 0);
}

#[tokio::test]
async fn test_zero_results_yield_empty_outcome() {
    let provider = MockPlacesProvider::new(RestaurantPage::default());
    let service = SearchService::new(provider.clone());

    let outcome = service.search(criteria("Tokyo")).await.unwrap();

    assert!(outcome.restaurants.is_empty());
    assert!(outcome.next_page_token.is_none());
    assert_eq!(provider.text_search_calls(), 1);
}

#[tokio::test]
async fn test_provider_error_fails_the_whole_call() {
    let provider = MockPlacesProvider::failing("REQUEST_DENIED", "Billing is disabled");
    let service = SearchService::new(provider);

    let err = service.search(criteria("Berlin")).await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("REQUEST_DENIED"));
    assert!(rendered.contains("Troubleshooting steps:"));
}

#[tokio::test]
async fn test_rating_filter_scenario() {
    // Two places upstream, ratings 4.5 and 3.0; min_rating 4.0 keeps one.
    let page = RestaurantPage {
        restaurants: vec![
            restaurant("p1", "Osteria Alta", Some(4.5)),
            restaurant("p2", "Corner Diner", Some(3.0)),
        ],
        next_page_token: None,
    };
    let provider = MockPlacesProvider::new(page);
    let service = SearchService::new(provider.clone());

    let outcome = service
        .search(SearchCriteria {
            cuisine: Some("italian".to_string()),
            min_rating: Some(4.0),
            ..criteria("New York, NY")
        })
        .await
        .unwrap();

    assert_eq!(outcome.restaurants.len(), 1);
    assert_eq!(outcome.restaurants[0].place_id, "p1");
    assert_eq!(outcome.criteria.min_rating, Some(4.0));

    // The outbound query text is the literal concatenation of the fixed
    // term, the cuisine, and the location.
    match provider.last_query().unwrap() {
        TextSearchQuery::Fresh { query, .. } => {
            assert_eq!(query, "restaurant italian in New York, NY");
        }
        other => panic!("Expected a fresh query, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pagination_carries_only_the_token() {
    let provider = MockPlacesProvider::new(RestaurantPage {
        restaurants: vec![restaurant("p9", "Page Two Bistro", Some(4.1))],
        next_page_token: None,
    });
    let service = SearchService::new(provider.clone());

    let outcome = service
        .search(SearchCriteria {
            page_token: Some("CpQCAgEAAFxg8o".to_string()),
            // Client-side filters still apply on continuation pages.
            min_rating: Some(4.0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(outcome.restaurants.len(), 1);
    assert_eq!(
        provider.last_query().unwrap(),
        TextSearchQuery::NextPage {
            token: "CpQCAgEAAFxg8o".to_string()
        }
    );
}

#[tokio::test]
async fn test_next_page_token_propagates_verbatim() {
    let provider = MockPlacesProvider::new(RestaurantPage {
        restaurants: vec![restaurant("p1", "First", Some(4.0))],
        next_page_token: Some("NEXT-TOKEN-123".to_string()),
    });
    let service = SearchService::new(provider);

    let outcome = service.search(criteria("Rome")).await.unwrap();

    assert_eq!(outcome.next_page_token.as_deref(), Some("NEXT-TOKEN-123"));
}

#[tokio::test]
async fn test_open_now_confirmation_drops_and_enriches() {
    let page = RestaurantPage {
        restaurants: vec![
            restaurant("open-1", "Early Bird", Some(4.2)),
            restaurant("closed-1", "Night Owl", Some(4.8)),
            restaurant("broken-1", "Flaky Cafe", Some(4.5)),
            restaurant("missing-1", "Ghost Kitchen", Some(4.9)),
            restaurant("nohours-1", "Mystery Bar", Some(4.3)),
        ],
        next_page_token: None,
    };
    let details = HashMap::from([
        (
            "open-1".to_string(),
            open_details("https://earlybird.example", "+1 212-555-0100"),
        ),
        ("closed-1".to_string(), DetailsReply::Closed),
        ("broken-1".to_string(), DetailsReply::Fail),
        ("missing-1".to_string(), DetailsReply::Missing),
        // Details succeed but carry no opening-hours payload: not confirmably
        // open, so the record is dropped too.
        ("nohours-1".to_string(), DetailsReply::NoHours),
    ]);
    let provider = MockPlacesProvider::with_details(page, details);
    let service = SearchService::new(provider.clone());

    let outcome = service
        .search(SearchCriteria {
            open_now: Some(true),
            ..criteria("Chicago")
        })
        .await
        .unwrap();

    // A details failure only drops that record; the call itself succeeds.
    assert_eq!(outcome.restaurants.len(), 1);
    let kept = &outcome.restaurants[0];
    assert_eq!(kept.place_id, "open-1");
    assert_eq!(kept.website.as_deref(), Some("https://earlybird.example"));
    assert_eq!(kept.phone_number.as_deref(), Some("+1 212-555-0100"));
    assert_eq!(
        kept.opening_hours.as_ref().unwrap()["open_now"],
        serde_json::json!(true)
    );
    // One lookup per filtered record, no more.
    assert_eq!(provider.details_calls(), 5);
}

#[tokio::test]
async fn test_open_now_preserves_provider_order() {
    let page = RestaurantPage {
        restaurants: vec![
            restaurant("a", "Alpha", Some(4.0)),
            restaurant("b", "Bravo", Some(4.0)),
            restaurant("c", "Charlie", Some(4.0)),
        ],
        next_page_token: None,
    };
    let details = HashMap::from([
        ("a".to_string(), open_details("https://a.example", "1")),
        ("b".to_string(), open_details("https://b.example", "2")),
        ("c".to_string(), open_details("https://c.example", "3")),
    ]);
    let provider = MockPlacesProvider::with_details(page, details);
    let service = SearchService::new(provider);

    let outcome = service
        .search(SearchCriteria {
            open_now: Some(true),
            ..criteria("Austin")
        })
        .await
        .unwrap();

    let order: Vec<&str> = outcome
        .restaurants
        .iter()
        .map(|r| r.place_id.as_str())
        .collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_open_now_false_skips_details_lookups() {
    let page = RestaurantPage {
        restaurants: vec![restaurant("p1", "Someplace", Some(4.0))],
        next_page_token: None,
    };
    let provider = MockPlacesProvider::new(page);
    let service = SearchService::new(provider.clone());

    let outcome = service
        .search(SearchCriteria {
            open_now: Some(false),
            ..criteria("Lisbon")
        })
        .await
        .unwrap();

    assert_eq!(outcome.restaurants.len(), 1);
    assert_eq!(provider.details_calls(), 0);
}

#[tokio::test]
async fn test_filters_run_before_details_lookups() {
    // Only the record that survives filtering is looked up.
    let page = RestaurantPage {
        restaurants: vec![
            restaurant("keep", "Good Spot", Some(4.6)),
            restaurant("drop", "Meh Spot", Some(3.2)),
        ],
        next_page_token: None,
    };
    let details = HashMap::from([(
        "keep".to_string(),
        open_details("https://goodspot.example", "+44 20 5555 0100"),
    )]);
    let provider = MockPlacesProvider::with_details(page, details);
    let service = SearchService::new(provider.clone());

    let outcome = service
        .search(SearchCriteria {
            min_rating: Some(4.0),
            open_now: Some(true),
            ..criteria("London")
        })
        .await
        .unwrap();

    assert_eq!(outcome.restaurants.len(), 1);
    assert_eq!(provider.details_calls(), 1);
}

#[tokio::test]
async fn test_effective_criteria_are_normalized() {
    let provider = MockPlacesProvider::new(RestaurantPage::default());
    let service = SearchService::new(provider);

    let outcome = service
        .search(SearchCriteria {
            location: Some("  Paris  ".to_string()),
            country: Some("FR".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(outcome.criteria.location.as_deref(), Some("Paris"));
    assert_eq!(outcome.criteria.country.as_deref(), Some("fr"));
}
