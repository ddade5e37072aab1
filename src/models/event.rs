//! Handler event contract
//!
//! The handler consumes an HTTP-like event (`httpMethod`, optional `body`) and
//! produces an HTTP-like response (`statusCode`, `headers`, JSON `body`). The
//! same shapes are used by the axum adapter and, with the `lambda` feature, are
//! deserialized directly from a proxy-style Lambda invocation.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Value of `Access-Control-Allow-Methods`
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Value of `Access-Control-Allow-Headers`
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Fixed header set attached to every response.
pub fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            ALLOWED_METHODS.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOWED_HEADERS.to_string(),
        ),
    ])
}

// == Api Request ==
/// Incoming event for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// HTTP method, matched exactly (e.g. `GET`)
    pub http_method: String,
    /// Raw request body, if any
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiRequest {
    /// Creates a new ApiRequest
    pub fn new(http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body,
        }
    }
}

// == Api Response ==
/// Outgoing response for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers, always including the CORS set
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded body, or empty for preflight responses
    pub body: String,
}

impl ApiResponse {
    /// Response with an empty body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: cors_headers(),
            body: String::new(),
        }
    }

    /// Response with `payload` encoded as the JSON body.
    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Self {
        let body = serde_json::to_string(payload).unwrap_or_else(|err| {
            error!(error = %err, "failed to encode response body");
            String::new()
        });

        Self {
            status_code: status.as_u16(),
            headers: cors_headers(),
            body,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!(header = %name, "dropping invalid response header"),
            }
        }

        response
    }
}
