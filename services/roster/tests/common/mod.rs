//! Test doubles shared by the roster integration tests

use async_trait::async_trait;
use roster_service::validator::TokenValidator;
use std::collections::HashMap;
use types::errors::FareError;
use types::identity::Identity;
use types::ids::Username;

/// Accepts a fixed set of tokens, each mapped to an identity
#[derive(Debug, Default)]
pub struct FakeValidator {
    tokens: HashMap<String, Identity>,
}

impl FakeValidator {
    pub fn with_drivers(usernames: &[&str]) -> Self {
        let tokens = usernames
            .iter()
            .map(|name| {
                (
                    token_for(name),
                    Identity::new(Username::new(*name), format!("Driver {name}")),
                )
            })
            .collect();
        Self { tokens }
    }
}

pub fn token_for(username: &str) -> String {
    format!("token-{username}")
}

#[async_trait]
impl TokenValidator for FakeValidator {
    async fn validate(&self, token: &str) -> Result<Identity, FareError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(FareError::InvalidToken)
    }
}
