//! Route and roster inputs of a journey
//!
//! The planner only sees the two traits. Deployed, both are HTTP clients
//! for the sibling services, called through `with_retry`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use service_common::upstream::{endpoint, with_retry, RetryPolicy, UpstreamError};
use types::driver::Driver;
use types::errors::FareError;
use types::route::RouteQuote;

const DIRECTIONS: &str = "directions";
const ROSTER: &str = "roster";

#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteQuote, FareError>;
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Every driver currently in the roster
    async fn snapshot(&self) -> Result<Vec<Driver>, FareError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Classify a non-success answer from a sibling service
async fn failure(service: &str, response: Response) -> UpstreamError {
    let status = response.status();
    if status.is_client_error() {
        let reason = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("unexpected status {status}"),
        };
        UpstreamError::Rejected(FareError::upstream(service, reason))
    } else {
        UpstreamError::Transient(format!("unexpected status {status}"))
    }
}

/// Client for the directions service's `/directions/{from}/{to}`
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl DirectionsClient {
    pub fn new(client: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url,
            retry,
        }
    }
}

#[async_trait]
impl RouteSource for DirectionsClient {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteQuote, FareError> {
        let url = endpoint(&self.base_url, DIRECTIONS, &["directions", origin, destination])?;
        let url = &url;
        let client = &self.client;

        with_retry(&self.retry, DIRECTIONS, move || async move {
            let response = client.get(url.clone()).send().await?;
            if response.status() != StatusCode::OK {
                return Err(failure(DIRECTIONS, response).await);
            }
            Ok(response.json::<RouteQuote>().await?)
        })
        .await
    }
}

/// Client for the roster service's `/roster` snapshot
#[derive(Debug, Clone)]
pub struct RosterClient {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl RosterClient {
    pub fn new(client: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url,
            retry,
        }
    }
}

#[async_trait]
impl RosterSource for RosterClient {
    async fn snapshot(&self) -> Result<Vec<Driver>, FareError> {
        let url = endpoint(&self.base_url, ROSTER, &["roster"])?;
        let url = &url;
        let client = &self.client;

        with_retry(&self.retry, ROSTER, move || async move {
            let response = client.get(url.clone()).send().await?;
            if response.status() != StatusCode::OK {
                return Err(failure(ROSTER, response).await);
            }
            Ok(response.json::<Vec<Driver>>().await?)
        })
        .await
    }
}
