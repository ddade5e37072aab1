//! API Routes
//!
//! Configures the Axum router. Every path is served by the same dispatcher,
//! so there are no individual routes.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{http_handler, AppState};

/// Creates the main router.
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
///
/// CORS headers are written by the dispatcher itself so that they are
/// identical on every response, including errors.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(http_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
