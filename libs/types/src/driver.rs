//! Driver and rate types
//!
//! A `Driver` is one roster entry: an identity plus the rate it charges per
//! kilometre. Rates are strictly positive; the only way to build one from
//! caller input is [`Rate::new`], which enforces that.

use crate::errors::FareError;
use crate::identity::Identity;
use crate::ids::Username;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Cost per kilometre, always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Rate(u64);

impl Rate {
    /// Validate a caller-supplied rate
    pub fn new(rate: i64) -> Result<Self, FareError> {
        if rate <= 0 {
            return Err(FareError::InvalidRate { rate });
        }
        Ok(Self(rate as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Rate {
    type Error = FareError;

    fn try_from(rate: i64) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<Rate> for u64 {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A driver currently available in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub username: Username,
    pub name: String,
    pub rate: Rate,
}

impl Driver {
    pub fn new(identity: Identity, rate: Rate) -> Self {
        Self {
            username: identity.username,
            name: identity.name,
            rate,
        }
    }

    /// Ordering used to pick the cheapest driver: rate, then username
    fn price_order(&self, other: &Self) -> Ordering {
        self.rate
            .cmp(&other.rate)
            .then_with(|| self.username.cmp(&other.username))
    }
}

/// Pick the driver with the lowest rate.
///
/// Ties go to the lexicographically lowest username, so the choice does not
/// depend on the order of the snapshot.
pub fn cheapest(drivers: &[Driver]) -> Option<&Driver> {
    drivers.iter().min_by(|a, b| a.price_order(b))
}
