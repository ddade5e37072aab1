//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::error::GreetingError;

/// Settings table name variable
pub const TABLE_NAME_VAR: &str = "SETTINGS_TABLE_NAME";

/// Which settings store backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// In-process table, lost on restart
    #[default]
    Memory,
    /// JSON file under the data directory
    File,
    /// Managed DynamoDB table
    DynamoDb,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables. Only the table name
/// has no default; its absence is reported but does not stop startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the settings table
    pub table_name: Option<String>,
    /// Store backend
    pub store_backend: StoreBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SETTINGS_TABLE_NAME` - Settings table name (required, no default)
    /// - `SETTINGS_STORE` - `memory`, `file` or `dynamodb` (default: memory)
    /// - `SETTINGS_DATA_DIR` - File backend directory (default: ./data)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a Config from any variable source, `from_env` reads the process
    /// environment through this.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let store_backend = match lookup("SETTINGS_STORE") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("{}, using the memory store", err);
                StoreBackend::Memory
            }),
            None => defaults.store_backend,
        };

        Self {
            table_name: lookup(TABLE_NAME_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            store_backend,
            data_dir: lookup("SETTINGS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Returns the table name or [`GreetingError::ConfigurationMissing`].
    pub fn require_table_name(&self) -> Result<&str, GreetingError> {
        self.table_name
            .as_deref()
            .ok_or(GreetingError::ConfigurationMissing)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: None,
            store_backend: StoreBackend::Memory,
            data_dir: PathBuf::from("./data"),
            server_port: 3000,
        }
    }
}
