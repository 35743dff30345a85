//! Fake route and roster sources for journey tests

use async_trait::async_trait;
use journey_service::sources::{RosterSource, RouteSource};
use types::driver::{Driver, Rate};
use types::errors::FareError;
use types::identity::Identity;
use types::ids::Username;
use types::route::RouteQuote;

pub struct FixedRoute(pub Result<(u64, u64), FareError>);

#[async_trait]
impl RouteSource for FixedRoute {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteQuote, FareError> {
        self.0
            .clone()
            .map(|(total, arterial)| RouteQuote::new(origin, destination, total, arterial))
    }
}

pub struct FixedRoster(pub Result<Vec<Driver>, FareError>);

#[async_trait]
impl RosterSource for FixedRoster {
    async fn snapshot(&self) -> Result<Vec<Driver>, FareError> {
        self.0.clone()
    }
}

pub fn driver(username: &str, rate: i64) -> Driver {
    Driver::new(
        Identity::new(Username::new(username), format!("Driver {username}")),
        Rate::new(rate).unwrap(),
    )
}

/// `count` drivers with rates `first, first + 1, ...`
pub fn drivers(count: usize, first: i64) -> Vec<Driver> {
    (0..count)
        .map(|i| driver(&format!("driver{i}"), first + i as i64))
        .collect()
}
