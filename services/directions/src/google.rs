//! Google Directions API client
//!
//! Only the fields the quote needs are decoded. The total is the summed
//! leg distance of the first route; the A-road share is the summed distance
//! of that route's steps whose instructions name an A road (`A` followed by
//! digits, as a whole word: "A38", "A4174", but not "A-level" or "BA12").

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::sync::LazyLock;
use types::route::RouteQuote;

use crate::provider::{DirectionsError, RouteProvider};

const DIRECTIONS_PATH: &str = "maps/api/directions/json";

static A_ROAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bA\d+\b").expect("A-road pattern is valid"));

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: Distance,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    distance: Distance,
    #[serde(default)]
    html_instructions: String,
}

#[derive(Debug, Deserialize)]
struct Distance {
    /// Metres
    value: u64,
}

pub fn is_a_road(instructions: &str) -> bool {
    A_ROAD.is_match(instructions)
}

/// Turn a decoded provider answer into a quote
fn quote_from(
    response: DirectionsResponse,
    origin: &str,
    destination: &str,
) -> Result<RouteQuote, DirectionsError> {
    let no_route = || DirectionsError::NoRoute {
        origin: origin.to_string(),
        destination: destination.to_string(),
    };

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" | "INVALID_REQUEST" => return Err(no_route()),
        status => {
            let detail = response.error_message.unwrap_or_default();
            return Err(DirectionsError::Provider(
                format!("directions status {status} {detail}").trim_end().to_string(),
            ));
        }
    }

    let route = response.routes.into_iter().next().ok_or_else(no_route)?;
    if route.legs.is_empty() {
        return Err(no_route());
    }

    let total = route
        .legs
        .iter()
        .fold(0u64, |acc, leg| acc.saturating_add(leg.distance.value));
    let arterial = route
        .legs
        .iter()
        .flat_map(|leg| &leg.steps)
        .filter(|step| is_a_road(&step.html_instructions))
        .fold(0u64, |acc, step| acc.saturating_add(step.distance.value));

    Ok(RouteQuote::new(origin, destination, total, arterial))
}

/// Route provider backed by the Google Directions JSON API
#[derive(Debug, Clone)]
pub struct GoogleDirections {
    client: Client,
    base_url: Url,
    api_key: String,
    region: String,
}

impl GoogleDirections {
    pub fn new(client: Client, base_url: Url, api_key: String, region: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            region,
        }
    }

    fn request_url(&self, origin: &str, destination: &str) -> Result<Url, DirectionsError> {
        let mut url = self
            .base_url
            .join(DIRECTIONS_PATH)
            .map_err(|err| DirectionsError::Provider(format!("invalid maps base URL: {err}")))?;
        url.query_pairs_mut()
            .append_pair("origin", origin)
            .append_pair("destination", destination)
            .append_pair("region", &self.region)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl RouteProvider for GoogleDirections {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteQuote, DirectionsError> {
        let url = self.request_url(origin, destination)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| DirectionsError::Provider(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectionsError::Provider(format!(
                "maps returned status {status}"
            )));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|err| DirectionsError::Provider(err.without_url().to_string()))?;

        let quote = quote_from(body, origin, destination)?;
        tracing::info!(
            origin,
            destination,
            total = quote.total_distance,
            a_road = quote.arterial_distance,
            "Route found",
        );
        Ok(quote)
    }
}
