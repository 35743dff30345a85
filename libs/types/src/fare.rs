//! Fare and journey types

use crate::driver::Driver;
use crate::route::RouteQuote;
use serde::{Deserialize, Serialize};

/// Fare surcharge. Every surcharge doubles the running cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Surcharge {
    /// More than half the route is on A roads
    ArterialRoute,
    /// Fewer drivers than the roster threshold
    ThinRoster,
    /// Quote requested inside the night window
    NightTime,
}

impl Surcharge {
    /// All surcharges in the order they are applied
    pub const ALL: [Surcharge; 3] = [
        Surcharge::ArterialRoute,
        Surcharge::ThinRoster,
        Surcharge::NightTime,
    ];

    pub fn multiplier(&self) -> u64 {
        2
    }
}

/// A priced journey between two places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub origin: String,
    pub destination: String,
    pub total_distance: u64,
    #[serde(rename = "aRoadDistance")]
    pub arterial_distance: u64,
    pub driver: Driver,
    /// Cost before surcharges
    pub base_cost: u64,
    /// Applied surcharges, in application order
    pub surcharges: Vec<Surcharge>,
    pub cost: u64,
}

impl Journey {
    pub fn new(
        route: RouteQuote,
        driver: Driver,
        base_cost: u64,
        surcharges: Vec<Surcharge>,
        cost: u64,
    ) -> Self {
        Self {
            origin: route.origin,
            destination: route.destination,
            total_distance: route.total_distance,
            arterial_distance: route.arterial_distance,
            driver,
            base_cost,
            surcharges,
            cost,
        }
    }
}
