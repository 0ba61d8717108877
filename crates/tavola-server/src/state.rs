use tavola_client::GooglePlacesClient;
use tavola_core::SearchService;

/// Shared application state for all handlers.
///
/// Built once in `main` and passed to handlers through Axum's `with_state`,
/// replacing any process-wide singleton: the one shared outbound client is
/// explicitly constructed, explicitly owned here, and safe for concurrent
/// use across simultaneous requests.
///
/// Both service fields are `None` when the Places API key is not configured;
/// the server stays up in that state and reports the problem through
/// `/health` and per-request errors.
#[derive(Clone)]
pub struct AppState {
    /// Search service for the search/filter/enrich pipeline
    pub search_service: Option<SearchService<GooglePlacesClient>>,

    /// Places client for direct diagnostic probes
    pub places_client: Option<GooglePlacesClient>,

    /// The configured API key, kept for diagnostic reporting only
    api_key: Option<String>,
}

impl AppState {
    /// Creates a new application state with all services initialized.
    pub fn new(places_client: Option<GooglePlacesClient>, api_key: Option<String>) -> Self {
        Self {
            search_service: places_client.clone().map(SearchService::new),
            places_client,
            api_key,
        }
    }

    /// Whether the upstream API key is configured.
    pub fn places_configured(&self) -> bool {
        self.places_client.is_some()
    }

    /// Length of the configured API key (0 when absent).
    pub fn api_key_length(&self) -> usize {
        self.api_key.as_deref().map_or(0, str::len)
    }

    /// Truncated key prefix for diagnostics, never the full key.
    pub fn api_key_prefix(&self) -> String {
        match &self.api_key {
            Some(key) if key.len() > 10 => {
                let prefix: String = key.chars().take(10).collect();
                format!("{prefix}...")
            }
            _ => "N/A".to_string(),
        }
    }
}
