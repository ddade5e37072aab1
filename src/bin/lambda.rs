//! Greeting Service - Lambda entry point
//!
//! Same dispatcher and store selection as the HTTP server, driven by the
//! Lambda runtime API instead of a TCP listener.

use greeting_service::config::TABLE_NAME_VAR;
use greeting_service::{lambda, open_store, Config};
use lambda_runtime::Error;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = Config::from_env();
    if let Err(err) = config.require_table_name() {
        // Startup continues; store access fails on first use instead.
        warn!("{}: {} is not set", err, TABLE_NAME_VAR);
    }

    // Built once per cold start and shared by every invocation
    let store = open_store(&config).await;
    lambda::run(store).await
}
