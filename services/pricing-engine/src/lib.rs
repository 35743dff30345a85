//! Pricing Engine
//!
//! Turns a route quote and a roster snapshot into a fare. Pure: the caller
//! supplies the hour of day, so the same inputs always give the same fare.

pub mod engine;
pub mod surcharge;

pub use engine::{Fare, PricingConfig, PricingEngine};
