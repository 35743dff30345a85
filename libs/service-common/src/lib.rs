//! Plumbing shared by every fare service binary
//!
//! - `error`: `AppError` and its `{"error": ...}` response
//! - `telemetry`: tracing subscriber setup
//! - `server`: router layers and serving with graceful shutdown
//! - `clock`: injectable wall clock
//! - `upstream`: client settings and bounded retry for cross-service calls

pub mod clock;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod upstream;
