use async_trait::async_trait;
use service_common::error::AppError;
use thiserror::Error;
use types::errors::FareError;
use types::route::RouteQuote;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The provider answered, but has no drivable route between the two places
    #[error("Could not find route between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },

    /// The provider could not be reached or gave an unusable answer
    #[error("{0}")]
    Provider(String),
}

impl From<DirectionsError> for AppError {
    fn from(err: DirectionsError) -> Self {
        match err {
            DirectionsError::NoRoute { .. } => AppError::BadRequest(err.to_string()),
            DirectionsError::Provider(reason) => {
                AppError::Fare(FareError::upstream("maps", reason))
            }
        }
    }
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteQuote, DirectionsError>;
}
