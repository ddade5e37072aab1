//! Response DTOs for the greeting service
//!
//! Defines the JSON body carried by every non-empty response.

use serde::{Deserialize, Serialize};

/// Greeting used when no name has been stored yet
pub const DEFAULT_GREETING: &str = "Hello, Welcome to Tech World.";

/// Response body for GET, POST and error responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Greeting or error message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Greeting for a known user name
    pub fn greeting(name: &str) -> Self {
        Self::new(format!("Greetings, {} Welcome to Tech World.", name))
    }

    /// Greeting used before any name has been stored
    pub fn default_greeting() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}
