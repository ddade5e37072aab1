//! Greeting Service - remembers the last submitted name
//!
//! A single dispatcher answers GET, POST and OPTIONS on any path, reading or
//! writing one setting in a pluggable key-value store.

pub mod api;
pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod store;

pub use api::{handle_event, AppState};
pub use config::Config;
pub use store::{open_store, SettingStore};
