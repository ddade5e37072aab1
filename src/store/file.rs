//! File Table Module
//!
//! Settings table persisted as a JSON object in `<data_dir>/<table>.json`, so
//! the last submitted name survives a restart.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::store::{Setting, SettingStore, StoreError};

type TableContents = HashMap<String, String>;

// == File Table ==
/// JSON-file backed settings table.
#[derive(Debug)]
pub struct FileTable {
    /// Directory holding the table file
    data_dir: PathBuf,
    /// Table name, None when unconfigured
    table: Option<String>,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileTable {
    // == Constructor ==
    /// Creates a table handle. Nothing is touched on disk until first access.
    pub fn new(data_dir: impl Into<PathBuf>, table: Option<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            table,
            write_lock: Mutex::new(()),
        }
    }

    fn path(&self) -> Result<PathBuf, StoreError> {
        let table = self.table.as_ref().ok_or(StoreError::TableNotConfigured)?;
        Ok(self.data_dir.join(format!("{}.json", table)))
    }

    async fn load(&self, path: &Path) -> Result<TableContents, StoreError> {
        match fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(TableContents::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, path: &Path, contents: &TableContents) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;

        let bytes = serde_json::to_vec_pretty(contents)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, path).await?;

        debug!(path = %path.display(), "settings table written");
        Ok(())
    }
}

#[async_trait]
impl SettingStore for FileTable {
    async fn get(&self, name: &str) -> Result<Option<Setting>, StoreError> {
        let path = self.path()?;
        let mut contents = self.load(&path).await?;
        Ok(contents
            .remove(name)
            .map(|value| Setting::new(name, value)))
    }

    async fn put(&self, setting: Setting) -> Result<(), StoreError> {
        let path = self.path()?;

        let _guard = self.write_lock.lock().await;
        let mut contents = self.load(&path).await?;
        contents.insert(setting.name, setting.value);
        self.save(&path, &contents).await
    }

    fn summary(&self) -> String {
        match self.path() {
            Ok(path) => format!("JSON file table \"{}\"", path.display()),
            Err(_) => format!(
                "JSON file table in \"{}\" (unconfigured)",
                self.data_dir.display()
            ),
        }
    }
}
