//! Error types for the greeting service
//!
//! Provides unified error handling using thiserror. Every handler failure is
//! turned into a response at the handler boundary; internal detail is logged
//! and never sent to the client.

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::{ApiResponse, MessageResponse};
use crate::store::StoreError;

// == Greeting Error Enum ==
/// Unified error type for the request handler.
#[derive(Error, Debug)]
pub enum GreetingError {
    /// Settings table name is not configured
    #[error("settings table name is not configured")]
    ConfigurationMissing,

    /// Reading the setting from the store failed
    #[error("failed to read setting: {0}")]
    StoreRead(#[source] StoreError),

    /// Writing the setting to the store failed
    #[error("failed to write setting: {0}")]
    StoreWrite(#[source] StoreError),

    /// Name missing or blank
    #[error("name is missing or blank")]
    Validation,

    /// Request body is not valid JSON for the expected shape
    #[error("invalid JSON in request body: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Request body is not UTF-8
    #[error("request body is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// HTTP method other than GET, POST or OPTIONS
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

impl GreetingError {
    /// HTTP status code reported to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GreetingError::ConfigurationMissing
            | GreetingError::StoreRead(_)
            | GreetingError::StoreWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GreetingError::Validation
            | GreetingError::MalformedInput(_)
            | GreetingError::InvalidEncoding(_) => StatusCode::BAD_REQUEST,
            GreetingError::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Generic message reported to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            GreetingError::ConfigurationMissing => {
                "Internal Server Error: Could not access database."
            }
            GreetingError::StoreRead(_) => "Error retrieving greeting.",
            GreetingError::StoreWrite(_) => "Error updating greeting.",
            GreetingError::Validation => "Name is required in the request body.",
            GreetingError::MalformedInput(_) | GreetingError::InvalidEncoding(_) => {
                "Invalid JSON in request body."
            }
            GreetingError::UnsupportedMethod(_) => "Method Not Allowed",
        }
    }

    // == Into API Response ==
    /// Logs the full error and converts it into a client-facing response.
    pub fn into_api_response(self) -> ApiResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }

        ApiResponse::json(status, &MessageResponse::new(self.client_message()))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the greeting service.
pub type Result<T> = std::result::Result<T, GreetingError>;
