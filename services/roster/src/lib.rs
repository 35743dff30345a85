//! Roster Store service
//!
//! Keeps the set of available drivers and their rates. Joining, leaving and
//! changing rate all require a token issued by the auth service.

pub mod config;
pub mod handlers;
pub mod models;
pub mod roster;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;
