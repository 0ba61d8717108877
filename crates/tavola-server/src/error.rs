use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use tavola_core::error::AppError;

/// API error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
            ),
            // Provider failures are the upstream's fault, not ours: 502 so
            // callers can tell them apart from local errors.
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg.clone()),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        });

        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::Validation(msg) => ApiError::BadRequest(msg.clone()),
            AppError::Config(_) => ApiError::Internal(err.to_string()),
            AppError::Places(_)
            | AppError::Client(_)
            | AppError::Network(_)
            | AppError::Timeout(_) => ApiError::Upstream(err.to_string()),
            AppError::InvalidUrl(_) | AppError::Serialization(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_core::PlacesErrorDetails;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(AppError::Validation("Location cannot be empty".into()));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_provider_failures_map_to_upstream() {
        let places = AppError::Places(PlacesErrorDetails::new(
            "OVER_QUERY_LIMIT".into(),
            "quota exhausted".into(),
            None,
        ));
        assert!(matches!(ApiError::from(places), ApiError::Upstream(_)));

        let timeout = AppError::Timeout(30);
        assert!(matches!(ApiError::from(timeout), ApiError::Upstream(_)));
    }

    #[test]
    fn test_config_maps_to_internal() {
        let err = ApiError::from(AppError::Config("GOOGLE_MAPS_API_KEY is not set".into()));
        match err {
            ApiError::Internal(msg) => assert!(msg.contains("GOOGLE_MAPS_API_KEY")),
            other => panic!("Expected Internal, got {other:?}"),
        }
    }
}
