//! Token validation capability
//!
//! The roster never verifies tokens itself; it asks a [`TokenValidator`].
//! Deployed, that is the auth service over HTTP. With the `in-process-auth`
//! feature it can be the `TokenService` directly; tests also use fakes.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use service_common::upstream::{endpoint, with_retry, RetryPolicy, UpstreamError};
use types::errors::FareError;
use types::identity::Identity;

const SERVICE: &str = "auth";

#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<Identity, FareError>;
}

#[cfg(feature = "in-process-auth")]
#[async_trait]
impl TokenValidator for auth_service::token::TokenService {
    async fn validate(&self, token: &str) -> Result<Identity, FareError> {
        auth_service::token::TokenService::validate(self, token)
    }
}

/// JWTs are three base64url segments joined by dots
pub fn is_token_shaped(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
        })
}

/// Validates tokens against the auth service's `/validate/{token}` endpoint
#[derive(Debug, Clone)]
pub struct HttpTokenValidator {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl HttpTokenValidator {
    pub fn new(client: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url,
            retry,
        }
    }
}

#[async_trait]
impl TokenValidator for HttpTokenValidator {
    async fn validate(&self, token: &str) -> Result<Identity, FareError> {
        if !is_token_shaped(token) {
            return Err(FareError::InvalidToken);
        }

        let url = endpoint(&self.base_url, SERVICE, &["validate", token])?;
        let url = &url;
        let client = &self.client;

        with_retry(&self.retry, SERVICE, move || async move {
            let response = client.get(url.clone()).send().await?;
            match response.status() {
                StatusCode::OK => Ok(response.json::<Identity>().await?),
                StatusCode::UNAUTHORIZED => Err(UpstreamError::Rejected(FareError::InvalidToken)),
                status if status.is_server_error() => {
                    Err(UpstreamError::Transient(format!("unexpected status {status}")))
                }
                status => Err(UpstreamError::Rejected(FareError::upstream(
                    SERVICE,
                    format!("unexpected status {status}"),
                ))),
            }
        })
        .await
    }
}
