//! Diagnostic endpoint for upstream key and billing configuration.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Test the Places API configuration with a canned search.
///
/// Issues a fixed `restaurant in New York` text search and returns the raw
/// upstream diagnostic payload so a misconfigured key, project, or billing
/// account can be diagnosed without reading server logs. Not meant for
/// production exposure; disable with `--debug-endpoints=false`.
#[utoipa::path(
    get,
    path = "/debug/google-maps",
    responses(
        (status = 200, description = "Raw upstream diagnostic payload"),
    ),
    tag = "debug"
)]
pub async fn debug_google_maps(State(state): State<AppState>) -> Json<Value> {
    let Some(client) = &state.places_client else {
        return Json(json!({
            "error": "Google Places client not initialized",
            "api_key_configured": false,
            "api_key_length": 0,
        }));
    };

    match client.probe().await {
        Ok(data) => {
            let api_status = data
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string();
            let error_message = data
                .get("error_message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            let mut payload = json!({
                "status": if api_status == "OK" { "success" } else { "error" },
                "api_response_status": api_status,
                "error_message": data.get("error_message").cloned().unwrap_or(Value::Null),
                "error_details": data.get("error_details").cloned().unwrap_or(Value::Null),
                "api_key_configured": true,
                "api_key_length": state.api_key_length(),
                "api_key_prefix": state.api_key_prefix(),
                "full_response": data,
            });

            if api_status == "REQUEST_DENIED" && error_message.to_lowercase().contains("billing") {
                payload["troubleshooting"] = billing_troubleshooting();
            }

            Json(payload)
        }
        Err(err) => Json(json!({
            "status": "error",
            "error": err.to_string(),
            "api_key_configured": true,
            "api_key_length": state.api_key_length(),
        })),
    }
}

/// Guidance for the most common REQUEST_DENIED cause: the key and the
/// billing-enabled project don't match.
fn billing_troubleshooting() -> Value {
    json!({
        "most_likely_cause": "API key belongs to a different project than the one with billing enabled",
        "steps": [
            "1. Go to https://console.cloud.google.com/apis/credentials",
            "2. Click on your API key (the name, not the key value)",
            "3. Note which project this API key belongs to",
            "4. Go to https://console.cloud.google.com/billing",
            "5. Verify that SAME project has billing enabled",
            "6. If billing is on a different project, either enable billing on the API key's project or create a new API key in the project with billing enabled",
        ],
    })
}
