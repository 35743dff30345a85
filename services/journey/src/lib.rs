//! Journey Orchestrator service
//!
//! Answers `/journey/{from}/{to}` by looking up the route and a roster
//! snapshot concurrently, then pricing the trip with the cheapest driver.

pub mod config;
pub mod handlers;
pub mod planner;
pub mod router;
pub mod sources;
pub mod state;
