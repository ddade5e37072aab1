//! Lambda Adapter
//!
//! Runs the dispatcher as a proxy-integration Lambda function. The invocation
//! payload is deserialized straight into [`ApiRequest`]; fields the handler
//! does not use (path, headers, request context) are ignored.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::debug;

use crate::api::handle_event;
use crate::models::{ApiRequest, ApiResponse};
use crate::store::SettingStore;

/// Handles one Lambda invocation against `store`.
pub async fn function_handler(
    store: &dyn SettingStore,
    event: LambdaEvent<ApiRequest>,
) -> Result<ApiResponse, Error> {
    let (request, context) = event.into_parts();
    debug!(request_id = %context.request_id, "Lambda invocation");

    Ok(handle_event(store, request).await)
}

/// Serves invocations from the Lambda runtime API until the runtime stops.
pub async fn run(store: Arc<dyn SettingStore>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiRequest>| {
        let store = store.clone();
        async move { function_handler(store.as_ref(), event).await }
    }))
    .await
}
