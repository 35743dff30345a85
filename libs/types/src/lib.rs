//! Types library for the fare quoting services
//!
//! Every service exchanges these shapes over HTTP, so each entity is defined
//! exactly once here.
//!
//! # Modules
//! - `ids`: `Username`, the key shared by tokens, roster entries and journeys
//! - `identity`: public account record
//! - `driver`: `Rate`, `Driver` and the cheapest-driver rule
//! - `route`: `RouteQuote` from the route provider
//! - `fare`: `Surcharge` and `Journey`
//! - `errors`: error taxonomy

pub mod driver;
pub mod errors;
pub mod fare;
pub mod identity;
pub mod ids;
pub mod route;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::driver::*;
    pub use crate::errors::*;
    pub use crate::fare::*;
    pub use crate::identity::*;
    pub use crate::ids::*;
    pub use crate::route::*;
}
