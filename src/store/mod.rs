//! Store Module
//!
//! Key-value persistence for the single greeting setting, behind an
//! object-safe async trait so the handler can be given any backend.

mod file;
mod memory;
mod setting;

#[cfg(feature = "dynamodb")]
mod dynamo;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, StoreBackend};

// Re-export public types
pub use file::FileTable;
pub use memory::MemoryTable;
pub use setting::Setting;

#[cfg(feature = "dynamodb")]
pub use dynamo::DynamoTable;

// == Public Constants ==
/// Name of the one setting this service manages
pub const SETTING_KEY: &str = "last_user_name";

// == Store Error ==
/// Failures raised by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No table name was configured
    #[error("settings table name is not configured")]
    TableNotConfigured,

    /// Filesystem failure in the file backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote store failure
    #[error("store backend error: {0}")]
    Backend(String),
}

// == Setting Store ==
/// Contract consumed by the handler: a keyed get and an unconditional put.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// Returns the setting stored under `name`, if any.
    async fn get(&self, name: &str) -> Result<Option<Setting>, StoreError>;

    /// Stores `setting`, overwriting any previous value.
    async fn put(&self, setting: Setting) -> Result<(), StoreError>;

    /// Human-readable description for startup logs.
    fn summary(&self) -> String;
}

// == Open Store ==
/// Constructs the configured backend.
///
/// A missing table name does not fail here; the returned store reports
/// [`StoreError::TableNotConfigured`] on first access instead.
pub async fn open_store(config: &Config) -> Arc<dyn SettingStore> {
    let table = config.table_name.clone();

    let store: Arc<dyn SettingStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(MemoryTable::new(table)),
        StoreBackend::File => Arc::new(FileTable::new(config.data_dir.clone(), table)),
        #[cfg(feature = "dynamodb")]
        StoreBackend::DynamoDb => Arc::new(DynamoTable::from_env(table).await),
        #[cfg(not(feature = "dynamodb"))]
        StoreBackend::DynamoDb => {
            tracing::warn!("built without the `dynamodb` feature, falling back to the memory store");
            Arc::new(MemoryTable::new(table))
        }
    };

    info!("Settings store: {}", store.summary());
    store
}
