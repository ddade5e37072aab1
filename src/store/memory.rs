//! Memory Table Module
//!
//! In-process settings table backed by a HashMap. Contents live as long as
//! the process does.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{Setting, SettingStore, StoreError};

// == Memory Table ==
/// Named in-memory settings table.
#[derive(Debug, Default)]
pub struct MemoryTable {
    /// Table name, None when unconfigured
    table: Option<String>,
    /// Setting name to value
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTable {
    // == Constructor ==
    /// Creates an empty table.
    ///
    /// # Arguments
    /// * `table` - Table name; with `None` every access fails with
    ///   [`StoreError::TableNotConfigured`]
    pub fn new(table: Option<String>) -> Self {
        Self {
            table,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn ensure_configured(&self) -> Result<(), StoreError> {
        match self.table {
            Some(_) => Ok(()),
            None => Err(StoreError::TableNotConfigured),
        }
    }

    // == Length ==
    /// Returns the number of stored settings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no setting has been stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SettingStore for MemoryTable {
    async fn get(&self, name: &str) -> Result<Option<Setting>, StoreError> {
        self.ensure_configured()?;
        let entries = self.entries.read().await;
        Ok(entries
            .get(name)
            .map(|value| Setting::new(name, value.clone())))
    }

    async fn put(&self, setting: Setting) -> Result<(), StoreError> {
        self.ensure_configured()?;
        let mut entries = self.entries.write().await;
        entries.insert(setting.name, setting.value);
        Ok(())
    }

    fn summary(&self) -> String {
        match &self.table {
            Some(table) => format!("in-memory table \"{}\"", table),
            None => "in-memory table (unconfigured)".to_string(),
        }
    }
}
