//! Cross-service calls
//!
//! Every call one service makes to another goes through a client with a
//! per-attempt timeout and through [`with_retry`], which retries transient
//! failures with capped exponential backoff.
//!
//! # Retry Eligibility
//!
//! An attempt ends in one of three ways:
//! - `Ok`: returned immediately
//! - [`UpstreamError::Rejected`]: the upstream gave a definitive answer
//!   (401 from auth, 400 from directions); returned immediately
//! - [`UpstreamError::Transient`]: connect failure, timeout, 5xx or an
//!   undecodable body; retried until the policy is exhausted, then reported
//!   as `FareError::UpstreamUnavailable`
//!
//! Only idempotent reads are routed through here.

use clap::Args;
use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use types::errors::FareError;

/// Upstream client settings shared by every service that calls another
#[derive(Debug, Clone, Args)]
pub struct UpstreamArgs {
    /// Per-attempt timeout for calls to other services, in milliseconds
    #[arg(long = "upstream-timeout-ms", env = "UPSTREAM_TIMEOUT_MS", default_value_t = 2000)]
    pub timeout_ms: u64,

    /// Retries after the first failed attempt of an idempotent call
    #[arg(long = "upstream-retries", env = "UPSTREAM_RETRIES", default_value_t = 2)]
    pub retries: u32,

    /// Backoff before the first retry, in milliseconds; doubles per retry
    #[arg(long = "upstream-backoff-ms", env = "UPSTREAM_BACKOFF_MS", default_value_t = 100)]
    pub backoff_ms: u64,
}

impl UpstreamArgs {
    pub fn client(&self) -> Result<Client, reqwest::Error> {
        let timeout = Duration::from_millis(self.timeout_ms);
        Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retries,
            initial_backoff: Duration::from_millis(self.backoff_ms),
            ..RetryPolicy::default()
        }
    }
}

/// Bounded retry schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// A single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt + 1`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(2),
        }
    }
}

/// Outcome of one failed attempt
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transient(String),

    #[error(transparent)]
    Rejected(FareError),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transient(err.to_string())
    }
}

/// Run `operation` until it succeeds, is rejected, or the policy runs out.
#[tracing::instrument(skip(policy, operation), fields(max_retries = policy.max_retries))]
pub async fn with_retry<F, Fut, T>(
    policy: &RetryPolicy,
    service: &str,
    mut operation: F,
) -> Result<T, FareError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::debug!(attempt = attempt + 1, "upstream call succeeded after retry");
                }
                return Ok(value);
            }
            Err(UpstreamError::Rejected(err)) => return Err(err),
            Err(UpstreamError::Transient(reason)) if attempt < policy.max_retries => {
                let delay = policy.backoff(attempt);
                tracing::debug!(
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %reason,
                    "transient upstream error, retrying after backoff",
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(UpstreamError::Transient(reason)) => {
                tracing::warn!(attempts = attempt + 1, error = %reason, "upstream call failed");
                return Err(FareError::upstream(service, reason));
            }
        }
    }
}

/// Append percent-encoded path segments to a base URL
pub fn endpoint(base: &Url, service: &str, segments: &[&str]) -> Result<Url, FareError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FareError::upstream(service, format!("{base} is not a valid base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            initial_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(40),
        }
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let p = policy(5);
        assert_eq!(p.backoff(0), Duration::from_millis(10));
        assert_eq!(p.backoff(1), Duration::from_millis(20));
        assert_eq!(p.backoff(2), Duration::from_millis(40));
        assert_eq!(p.backoff(3), Duration::from_millis(40));
        assert_eq!(p.backoff(40), Duration::from_millis(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_recovers_from_transient_errors() {
        let calls = AtomicU32::new(0);
        let result = with_retry(&policy(2), "roster", || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(UpstreamError::Transient("connection reset".into()))
            } else {
                Ok(7)
            }
        })
        .await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up_as_upstream_unavailable() {
        let calls = AtomicU32::new(0);
        let result: Result<(), FareError> = with_retry(&policy(2), "directions", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(UpstreamError::Transient("timed out".into()))
        })
        .await;

        assert_eq!(result, Err(FareError::upstream("directions", "timed out")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), FareError> = with_retry(&policy(4), "auth", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(UpstreamError::Rejected(FareError::InvalidToken))
        })
        .await;

        assert_eq!(result, Err(FareError::InvalidToken));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://directions-service:8000/").unwrap();
        let url = endpoint(&base, "directions", &["directions", "New York", "Bath/Spa"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://directions-service:8000/directions/New%20York/Bath%2FSpa"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://gateway/api").unwrap();
        let url = endpoint(&base, "roster", &["roster"]).unwrap();
        assert_eq!(url.as_str(), "http://gateway/api/roster");
    }
}
