//! Route quotes
//!
//! Distances are whole metres as reported by the route provider.

use serde::{Deserialize, Serialize};

/// Distances for one origin/destination pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuote {
    pub origin: String,
    pub destination: String,
    /// Total route length in metres
    pub total_distance: u64,
    /// Metres travelled on A roads
    #[serde(rename = "aRoadDistance")]
    pub arterial_distance: u64,
}

impl RouteQuote {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        total_distance: u64,
        arterial_distance: u64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            total_distance,
            arterial_distance,
        }
    }

    /// True when more than half the route (integer halves) is on A roads
    pub fn is_mostly_arterial(&self) -> bool {
        self.arterial_distance > self.total_distance / 2
    }
}
