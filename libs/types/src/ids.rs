//! Identifier types for platform entities
//!
//! Usernames are the only key shared between services: the token subject,
//! the roster key and the driver reference in a journey are all the same
//! `Username`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique account name, used as the key of every per-driver record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Create a username from any string-like value
    ///
    /// # Panics
    /// Panics if the name is empty or contains whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(Self::is_valid(&name), "Username must be non-empty without whitespace");
        Self(name)
    }

    /// Try to create a username, returning None if invalid
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Some(Self(name))
        } else {
            None
        }
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty() && !name.chars().any(char::is_whitespace)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
