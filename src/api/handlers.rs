//! API Handlers
//!
//! The request dispatcher and the axum adapter that feeds it.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
};
use tracing::{debug, info};

use crate::error::{GreetingError, Result};
use crate::models::{ApiRequest, ApiResponse, MessageResponse, NameRequest};
use crate::store::{Setting, SettingStore, StoreError, SETTING_KEY};

/// Application state shared across all requests.
///
/// Holds the store constructed once at startup; the handler never reaches for
/// a global client.
#[derive(Clone)]
pub struct AppState {
    /// Settings store
    pub store: Arc<dyn SettingStore>,
}

impl AppState {
    /// Creates a new AppState around any store backend.
    pub fn new(store: impl SettingStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState around an already shared store.
    pub fn from_shared(store: Arc<dyn SettingStore>) -> Self {
        Self { store }
    }
}

// == Dispatcher ==
/// Handles one invocation.
///
/// Never fails: every error is logged and turned into a response carrying the
/// CORS headers and a generic message.
pub async fn handle_event(store: &dyn SettingStore, event: ApiRequest) -> ApiResponse {
    info!(method = %event.http_method, "Received event");
    debug!(
        body_len = event.body.as_ref().map_or(0, String::len),
        "event body"
    );

    let result = match event.http_method.as_str() {
        "OPTIONS" => Ok(ApiResponse::empty(StatusCode::OK)),
        "GET" => read_greeting(store).await,
        "POST" => update_greeting(store, event.body.as_deref()).await,
        other => Err(GreetingError::UnsupportedMethod(other.to_string())),
    };

    result.unwrap_or_else(GreetingError::into_api_response)
}

/// GET: greets the last stored name, or everyone if none is stored.
async fn read_greeting(store: &dyn SettingStore) -> Result<ApiResponse> {
    let setting = store
        .get(SETTING_KEY)
        .await
        .map_err(|err| store_failure(err, GreetingError::StoreRead))?;

    let message = match setting.as_ref().and_then(Setting::non_empty_value) {
        Some(name) => MessageResponse::greeting(name),
        None => MessageResponse::default_greeting(),
    };

    Ok(ApiResponse::json(StatusCode::OK, &message))
}

/// POST: stores the submitted name and greets it.
async fn update_greeting(store: &dyn SettingStore, body: Option<&str>) -> Result<ApiResponse> {
    let name = NameRequest::parse(body)?.validated_name()?;

    store
        .put(Setting::last_user_name(name.as_str()))
        .await
        .map_err(|err| store_failure(err, GreetingError::StoreWrite))?;
    info!(name = %name, "Stored last user name");

    Ok(ApiResponse::json(
        StatusCode::OK,
        &MessageResponse::greeting(&name),
    ))
}

/// A table that was never named is reported as missing configuration rather
/// than as an ordinary read or write failure.
fn store_failure(err: StoreError, wrap: fn(StoreError) -> GreetingError) -> GreetingError {
    match err {
        StoreError::TableNotConfigured => GreetingError::ConfigurationMissing,
        other => wrap(other),
    }
}

// == HTTP Adapter ==
/// Fallback handler for every path: converts the HTTP request into an event.
pub async fn http_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ApiResponse {
    let body = match decode_body(&method, &body) {
        Ok(body) => body,
        Err(err) => return err.into_api_response(),
    };

    handle_event(state.store.as_ref(), ApiRequest::new(method.as_str(), body)).await
}

/// An empty body becomes a missing body. A body that is not UTF-8 is rejected
/// for POST and ignored for every other method, none of which read it.
fn decode_body(method: &Method, body: &Bytes) -> Result<Option<String>> {
    if body.is_empty() {
        return Ok(None);
    }

    match std::str::from_utf8(body) {
        Ok(text) => Ok(Some(text.to_string())),
        Err(err) if *method == Method::POST => Err(GreetingError::InvalidEncoding(err)),
        Err(_) => {
            debug!(method = %method, "ignoring non UTF-8 request body");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::ALLOWED_METHODS;
    use crate::store::{MemoryTable, StoreError};
    use async_trait::async_trait;

    /// Store double that fails every access
    struct BrokenStore;

    #[async_trait]
    impl SettingStore for BrokenStore {
        async fn get(&self, _name: &str) -> std::result::Result<Option<Setting>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn put(&self, _setting: Setting) -> std::result::Result<(), StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        fn summary(&self) -> String {
            "broken".to_string()
        }
    }

    fn table() -> MemoryTable {
        MemoryTable::new(Some("settings".to_string()))
    }

    fn message(response: &ApiResponse) -> String {
        let body: MessageResponse = serde_json::from_str(&response.body).unwrap();
        body.message
    }

    #[tokio::test]
    async fn test_get_without_prior_post() {
        let store = table();

        let response = handle_event(&store, ApiRequest::new("GET", None)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(message(&response), "Hello, Welcome to Tech World.");
    }

    #[tokio::test]
    async fn test_post_then_get() {
        let store = table();

        let body = Some(r#"{"name": "Alice"}"#.to_string());
        let response = handle_event(&store, ApiRequest::new("POST", body)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(message(&response), "Greetings, Alice Welcome to Tech World.");

        let response = handle_event(&store, ApiRequest::new("GET", None)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(message(&response), "Greetings, Alice Welcome to Tech World.");
    }

    #[tokio::test]
    async fn test_post_stores_trimmed_name() {
        let store = table();

        let body = Some(r#"{"name": "  Alice  "}"#.to_string());
        handle_event(&store, ApiRequest::new("POST", body)).await;

        let setting = store.get(SETTING_KEY).await.unwrap().unwrap();
        assert_eq!(setting.value, "Alice");
    }

    #[tokio::test]
    async fn test_post_blank_name() {
        let store = table();

        let body = Some(r#"{"name": "  "}"#.to_string());
        let response = handle_event(&store, ApiRequest::new("POST", body)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), "Name is required in the request body.");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_post_without_body() {
        let store = table();

        let response = handle_event(&store, ApiRequest::new("POST", None)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), "Name is required in the request body.");
    }

    #[tokio::test]
    async fn test_post_invalid_json() {
        let store = table();

        let body = Some("not-json".to_string());
        let response = handle_event(&store, ApiRequest::new("POST", body)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), "Invalid JSON in request body.");
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let store = table();

        let response = handle_event(&store, ApiRequest::new("OPTIONS", None)).await;
        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());
        assert_eq!(
            response.headers["Access-Control-Allow-Methods"],
            ALLOWED_METHODS
        );
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let store = table();

        for method in ["DELETE", "PUT", "PATCH", "get"] {
            let response = handle_event(&store, ApiRequest::new(method, None)).await;
            assert_eq!(response.status_code, 405, "method {}", method);
            assert_eq!(message(&response), "Method Not Allowed");
        }
    }

    #[tokio::test]
    async fn test_store_failures_are_generic() {
        let store = BrokenStore;

        let response = handle_event(&store, ApiRequest::new("GET", None)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(message(&response), "Error retrieving greeting.");

        let body = Some(r#"{"name": "Alice"}"#.to_string());
        let response = handle_event(&store, ApiRequest::new("POST", body)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(message(&response), "Error updating greeting.");
        assert!(!response.body.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_unconfigured_table() {
        let store = MemoryTable::new(None);

        let response = handle_event(&store, ApiRequest::new("OPTIONS", None)).await;
        assert_eq!(response.status_code, 200);

        let response = handle_event(&store, ApiRequest::new("GET", None)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            message(&response),
            "Internal Server Error: Could not access database."
        );

        let body = Some(r#"{"name": "Alice"}"#.to_string());
        let response = handle_event(&store, ApiRequest::new("POST", body)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            message(&response),
            "Internal Server Error: Could not access database."
        );
    }

    #[tokio::test]
    async fn test_stored_empty_value_reads_as_absent() {
        let store = table();
        store.put(Setting::last_user_name("")).await.unwrap();

        let response = handle_event(&store, ApiRequest::new("GET", None)).await;
        assert_eq!(message(&response), "Hello, Welcome to Tech World.");
    }

    #[tokio::test]
    async fn test_http_handler_rejects_non_utf8_post() {
        let store = Arc::new(table());
        let state = AppState::from_shared(store.clone());

        let body = Bytes::from_static(b"{\"name\":\"\xff\xfe\"}");
        let response = http_handler(State(state), Method::POST, body).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), "Invalid JSON in request body.");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_http_handler_ignores_non_utf8_get_body() {
        let state = AppState::new(table());

        let body = Bytes::from_static(b"\xff");
        let response = http_handler(State(state), Method::GET, body).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(message(&response), "Hello, Welcome to Tech World.");
    }

    #[tokio::test]
    async fn test_http_handler_empty_body_is_missing() {
        let state = AppState::new(table());

        let response = http_handler(State(state), Method::POST, Bytes::new()).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), "Name is required in the request body.");
    }
}
