//! DynamoDB Table Module
//!
//! Settings table stored in a managed DynamoDB table. Items are keyed by the
//! `SettingName` string attribute and carry the value in `Value`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use tracing::error;

use crate::store::{Setting, SettingStore, StoreError};

/// Partition key attribute
const SETTING_NAME: &str = "SettingName";
/// Value attribute
const VALUE: &str = "Value";

// == Dynamo Table ==
/// DynamoDB backed settings table.
pub struct DynamoTable {
    // Client wraps an Arc so should be low cost to clone
    client: Client,
    table: Option<String>,
}

impl DynamoTable {
    /// Creates a table handle using credentials and region from the environment.
    pub async fn from_env(table: Option<String>) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), table)
    }

    /// Creates a table handle around an existing client.
    pub fn new(client: Client, table: Option<String>) -> Self {
        Self { client, table }
    }

    fn table(&self) -> Result<&str, StoreError> {
        self.table.as_deref().ok_or(StoreError::TableNotConfigured)
    }
}

fn backend_error<E: std::fmt::Display>(err: E) -> StoreError {
    error!(error = %err, "DynamoDB request failed");
    StoreError::Backend(err.to_string())
}

/// Maps a fetched item to a setting. An item without a string `Value` is
/// treated as absent.
fn setting_from_item(
    name: &str,
    item: Option<HashMap<String, AttributeValue>>,
) -> Option<Setting> {
    match item?.remove(VALUE) {
        Some(AttributeValue::S(value)) => Some(Setting::new(name, value)),
        _ => None,
    }
}

#[async_trait]
impl SettingStore for DynamoTable {
    async fn get(&self, name: &str) -> Result<Option<Setting>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(self.table()?)
            .key(SETTING_NAME, AttributeValue::S(name.to_string()))
            .send()
            .await
            .map_err(backend_error)?;

        Ok(setting_from_item(name, response.item))
    }

    async fn put(&self, setting: Setting) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(self.table()?)
            .item(SETTING_NAME, AttributeValue::S(setting.name))
            .item(VALUE, AttributeValue::S(setting.value))
            .send()
            .await
            .map_err(backend_error)?;
        Ok(())
    }

    fn summary(&self) -> String {
        match &self.table {
            Some(table) => format!("DynamoDB table \"{}\"", table),
            None => "DynamoDB table (unconfigured)".to_string(),
        }
    }
}
