//! Route Provider service
//!
//! Answers `/directions/{from}/{to}` with the total length of the route and
//! the part of it driven on A roads, as reported by the Google Directions API.

pub mod config;
pub mod google;
pub mod handlers;
pub mod provider;
pub mod router;
pub mod state;
