//! Setting Record
//!
//! The single key-value record persisted by the service.

use serde::{Deserialize, Serialize};

use crate::store::SETTING_KEY;

// == Setting ==
/// A named setting and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Setting name (the store key)
    pub name: String,
    /// Stored value
    pub value: String,
}

impl Setting {
    /// Creates a new Setting
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The last submitted user name
    pub fn last_user_name(value: impl Into<String>) -> Self {
        Self::new(SETTING_KEY, value)
    }

    /// Returns the value, treating an empty string as absent.
    pub fn non_empty_value(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }
}
