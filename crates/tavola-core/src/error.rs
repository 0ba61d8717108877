use thiserror::Error;

/// Structured error details reported by the Places API.
///
/// The Places API signals failures in the response body rather than the HTTP
/// status line: a `status` string (e.g. `REQUEST_DENIED`, `OVER_QUERY_LIMIT`),
/// an optional human-readable `error_message`, and optional structured
/// `error_details`. This type carries all three so callers can self-diagnose
/// credential and billing problems from the error text alone.
#[derive(Debug, Clone)]
pub struct PlacesErrorDetails {
    /// The upstream status code string (never `OK` or `ZERO_RESULTS`).
    pub status: String,
    /// Human-readable error message from the API.
    pub message: String,
    /// Structured error details, when the API supplies them.
    pub details: Option<serde_json::Value>,
}

impl PlacesErrorDetails {
    pub fn new(status: String, message: String, details: Option<serde_json::Value>) -> Self {
        Self {
            status,
            message,
            details,
        }
    }

    /// Whether the upstream rejected the request outright (bad key, billing
    /// disabled, API not enabled, key restrictions).
    pub fn is_request_denied(&self) -> bool {
        self.status == "REQUEST_DENIED"
    }

    /// Step-by-step remediation guidance for `REQUEST_DENIED` responses.
    ///
    /// This is user-facing diagnostic text, not a control-flow signal: the
    /// upstream reports the same status for several distinct misconfigurations
    /// and the caller has to check each one.
    pub fn remediation() -> &'static str {
        "Troubleshooting steps:\n\
         1. Verify billing is enabled: https://console.cloud.google.com/project/_/billing/enable\n\
         2. Check that Places API is enabled: https://console.cloud.google.com/apis/library/places-backend.googleapis.com\n\
         3. Verify your API key is valid and not expired\n\
         4. Check API key restrictions:\n\
         \x20  - If restricted by API, ensure 'Places API' is included\n\
         \x20  - If restricted by IP/HTTP referrer, ensure your server IP/domain is allowed\n\
         5. Verify the API key belongs to the correct project\n\
         6. Check API quotas haven't been exceeded"
    }
}

impl std::fmt::Display for PlacesErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status: {}\nError Message: {}", self.status, self.message)?;
        if let Some(details) = &self.details {
            write!(f, "\nError Details: {}", details)?;
        }
        if self.is_request_denied() {
            write!(f, "\n\n{}", Self::remediation())?;
        }
        Ok(())
    }
}

/// Application-wide error types.
///
/// Three failure families matter to callers and map to distinct HTTP
/// responses at the API boundary:
///
/// - [`AppError::Config`]: the upstream credential is missing; the search
///   operation cannot be attempted at all.
/// - [`AppError::Validation`]: malformed input, rejected before any outbound
///   call is made.
/// - [`AppError::Places`] (and the transport variants `Client`, `Network`,
///   `Timeout`): the upstream call failed; surfaced to the caller, never
///   retried.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration is missing or invalid.
    ///
    /// Raised when the Places API key is not set. Fatal to the search
    /// capability, not to the process: the server stays up and reports the
    /// problem through `/health`.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request parameters failed validation.
    ///
    /// Validation runs before the query builder, so an invalid parameter set
    /// never produces an outbound call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The Places API reported a non-success status.
    #[error("Google Places API error: {0}")]
    Places(PlacesErrorDetails),

    /// HTTP client request failed.
    ///
    /// Covers non-2xx responses and request errors that are neither timeouts
    /// nor connection failures.
    #[error("API client error: {0}")]
    Client(String),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// URL parsing failed, typically when constructing API endpoints.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
