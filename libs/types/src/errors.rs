//! Error taxonomy shared by every service
//!
//! Each variant is a caller-visible outcome. Internal detail (why a token
//! failed, which upstream timed out) goes to the logs, not into the variant.

use crate::ids::Username;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FareError {
    /// Unknown username or wrong password; the two are never distinguished
    #[error("Incorrect credentials provided")]
    InvalidCredentials,

    /// Malformed, badly signed or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Driver {username} is already in the roster")]
    DuplicateMembership { username: Username },

    #[error("Driver {username} is not in the roster")]
    NotInRoster { username: Username },

    #[error("Invalid rate {rate}: rate must be a positive integer")]
    InvalidRate { rate: i64 },

    #[error("No drivers available")]
    NoDriversAvailable,

    #[error("{service} service unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },
}

impl FareError {
    /// Build an upstream failure for the named service
    pub fn upstream(service: impl Into<String>, reason: impl ToString) -> Self {
        FareError::UpstreamUnavailable {
            service: service.into(),
            reason: reason.to_string(),
        }
    }
}

pub type FareResult<T> = Result<T, FareError>;
