//! Identity records
//!
//! The public view of an account. The credential hash never leaves the
//! auth service, so it is not part of this shared shape.

use crate::ids::Username;
use serde::{Deserialize, Serialize};

/// A registered account as seen by other services
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub username: Username,
    /// Display name
    pub name: String,
}

impl Identity {
    pub fn new(username: Username, name: impl Into<String>) -> Self {
        Self {
            username,
            name: name.into(),
        }
    }

    /// Identity for a token subject that has no stored account
    pub fn minimal(username: Username) -> Self {
        Self {
            username,
            name: String::new(),
        }
    }
}
