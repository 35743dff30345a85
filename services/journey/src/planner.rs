//! Journey planning
//!
//! The route lookup and the roster snapshot are independent reads and run
//! concurrently. Either failing fails the whole journey; no partial journey
//! is ever returned. The roster may change between the snapshot and the
//! fare; the fare reflects the snapshot.

use pricing_engine::PricingEngine;
use service_common::clock::Clock;
use std::sync::Arc;
use types::errors::FareError;
use types::fare::Journey;

use crate::sources::{RosterSource, RouteSource};

pub struct JourneyPlanner {
    routes: Arc<dyn RouteSource>,
    roster: Arc<dyn RosterSource>,
    pricing: PricingEngine,
    clock: Arc<dyn Clock>,
}

impl JourneyPlanner {
    pub fn new(
        routes: Arc<dyn RouteSource>,
        roster: Arc<dyn RosterSource>,
        pricing: PricingEngine,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            routes,
            roster,
            pricing,
            clock,
        }
    }

    pub async fn get_journey(&self, origin: &str, destination: &str) -> Result<Journey, FareError> {
        let (quote, drivers) = tokio::try_join!(
            self.routes.route(origin, destination),
            self.roster.snapshot(),
        )?;

        let hour = self.clock.local_hour();
        let fare = self.pricing.compute(&quote, &drivers, hour)?;

        tracing::info!(
            origin,
            destination,
            driver = %fare.driver.username,
            cost = fare.cost,
            surcharges = ?fare.surcharges,
            roster_size = drivers.len(),
            hour,
            "Journey priced",
        );

        Ok(Journey::new(
            quote,
            fare.driver,
            fare.base_cost,
            fare.surcharges,
            fare.cost,
        ))
    }
}
