//! Pricing Engine: fare computation
//!
//! 1. Pick the cheapest driver in the snapshot.
//! 2. Base cost = rate × whole kilometres (truncating).
//! 3. Double the cost once per applicable surcharge.

use types::driver::{cheapest, Driver};
use types::errors::FareError;
use types::fare::Surcharge;
use types::route::RouteQuote;

use crate::surcharge::{self, SurchargeContext};

/// Pricing engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Metres per billed distance unit
    pub meters_per_unit: u64,
    /// Rosters smaller than this trigger the thin-roster surcharge
    pub thin_roster_threshold: usize,
    /// First hour of the night window
    pub night_start_hour: u32,
    /// Last hour of the night window
    pub night_end_hour: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            meters_per_unit: 1000,
            thin_roster_threshold: 5,
            night_start_hour: 23,
            night_end_hour: 6,
        }
    }
}

/// A computed fare and how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fare {
    pub driver: Driver,
    pub base_cost: u64,
    pub surcharges: Vec<Surcharge>,
    pub cost: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a pricing engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pricing engine with custom configuration
    pub fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a route against a roster snapshot at the given local hour.
    ///
    /// Fails with `NoDriversAvailable` when the snapshot is empty.
    pub fn compute(
        &self,
        quote: &RouteQuote,
        roster: &[Driver],
        hour: u32,
    ) -> Result<Fare, FareError> {
        let driver = cheapest(roster).ok_or(FareError::NoDriversAvailable)?;

        let units = quote.total_distance / self.config.meters_per_unit.max(1);
        let base_cost = driver.rate.get().saturating_mul(units);

        let ctx = SurchargeContext {
            quote,
            roster_size: roster.len(),
            hour,
        };
        let surcharges = surcharge::applicable(&ctx, &self.config);
        let cost = surcharges
            .iter()
            .fold(base_cost, |cost, s| cost.saturating_mul(s.multiplier()));

        Ok(Fare {
            driver: driver.clone(),
            base_cost,
            surcharges,
            cost,
        })
    }
}
