//! Request DTOs for the greeting service
//!
//! Defines the structure of incoming request bodies.

use serde::Deserialize;

use crate::error::{GreetingError, Result};

/// Request body for the POST operation
///
/// # Fields
/// - `name`: The user name to remember; optional so that a missing field is
///   reported as a validation error instead of a parse error
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameRequest {
    /// The submitted user name
    #[serde(default)]
    pub name: Option<String>,
}

impl NameRequest {
    /// Parses a raw request body.
    ///
    /// A missing body is treated as an empty JSON object.
    pub fn parse(body: Option<&str>) -> Result<Self> {
        match body {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Returns the trimmed name, or a validation error if it is missing or blank.
    pub fn validated_name(&self) -> Result<String> {
        let trimmed = self.name.as_deref().map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(GreetingError::Validation);
        }
        Ok(trimmed.to_string())
    }
}
