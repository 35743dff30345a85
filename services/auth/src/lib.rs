//! Token Service
//!
//! Issues short-lived signed tokens from a username/password pair and
//! validates them for the other services.

pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod token;
