//! Surcharge rules
//!
//! Each rule is evaluated against the original quote and roster, never
//! against the running cost, so rules are independent of each other.

use crate::engine::PricingConfig;
use types::fare::Surcharge;
use types::route::RouteQuote;

/// Inputs the surcharge rules look at
#[derive(Debug, Clone, Copy)]
pub struct SurchargeContext<'a> {
    pub quote: &'a RouteQuote,
    pub roster_size: usize,
    /// Local hour of day, 0-23
    pub hour: u32,
}

/// Whether `hour` falls in the night window, both ends inclusive.
///
/// A window whose start is after its end wraps past midnight.
pub fn is_night(hour: u32, config: &PricingConfig) -> bool {
    let (start, end) = (config.night_start_hour, config.night_end_hour);
    if start <= end {
        (start..=end).contains(&hour)
    } else {
        hour >= start || hour <= end
    }
}

pub fn applies(surcharge: Surcharge, ctx: &SurchargeContext<'_>, config: &PricingConfig) -> bool {
    match surcharge {
        Surcharge::ArterialRoute => ctx.quote.is_mostly_arterial(),
        Surcharge::ThinRoster => ctx.roster_size < config.thin_roster_threshold,
        Surcharge::NightTime => is_night(ctx.hour, config),
    }
}

/// Surcharges that apply, in application order
pub fn applicable(ctx: &SurchargeContext<'_>, config: &PricingConfig) -> Vec<Surcharge> {
    Surcharge::ALL
        .into_iter()
        .filter(|surcharge| applies(*surcharge, ctx, config))
        .collect()
}
