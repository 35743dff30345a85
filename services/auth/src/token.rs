//! Token issuance and validation
//!
//! Tokens are HS256 JWTs carrying `sub`, `name`, `iat` and `exp`. Nothing is
//! stored server side: a token is valid when its signature checks out under
//! the shared secret, its header names HS256, and `exp` is after now.
//!
//! Expiry is checked against the injected [`Clock`] rather than inside
//! `jsonwebtoken`, so tests can move time.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use service_common::clock::Clock;
use std::sync::Arc;
use thiserror::Error;
use types::errors::FareError;
use types::identity::Identity;
use types::ids::Username;

use crate::credentials::CredentialStore;

/// Token lifetime from issuance
pub const TOKEN_TTL_SECS: i64 = 5 * 60;

/// The only accepted signing algorithm
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub identity: Identity,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error(transparent)]
    Rejected(#[from] FareError),

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

pub struct TokenService {
    credentials: CredentialStore,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: &[u8], credentials: CredentialStore, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            credentials,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }

    /// Check credentials and sign a token for the account
    pub fn issue(&self, username: &str, password: &str) -> Result<IssuedToken, TokenError> {
        let identity = self
            .credentials
            .verify(username, password)
            .inspect_err(|_| tracing::warn!(username, "Sign-in failed"))?;

        let issued_at = self.clock.now();
        let expires_at = issued_at + TimeDelta::seconds(TOKEN_TTL_SECS);
        let claims = Claims {
            sub: identity.username.to_string(),
            name: identity.name.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding)?;

        tracing::info!(username = %identity.username, "Token issued");
        Ok(IssuedToken {
            token,
            identity,
            expires_at,
        })
    }

    /// Verify a token and resolve its subject.
    ///
    /// Every failure is `InvalidToken`; the reason is only logged.
    pub fn validate(&self, token: &str) -> Result<Identity, FareError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "Token rejected");
                FareError::InvalidToken
            })?
            .claims;

        if claims.exp <= self.clock.now().timestamp() {
            tracing::debug!(sub = %claims.sub, "Token expired");
            return Err(FareError::InvalidToken);
        }

        let username = Username::try_new(claims.sub).ok_or(FareError::InvalidToken)?;
        Ok(self
            .credentials
            .identity(username.as_str())
            .cloned()
            .unwrap_or_else(|| Identity::minimal(username)))
    }
}
