//! Account seeding at startup
//!
//! Accounts come from a JSON file of `[{username, name, password}]`, or from
//! the built-in demo accounts when no file is configured.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use types::identity::Identity;
use types::ids::Username;

use crate::credentials::CredentialStore;

#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    pub username: String,
    pub name: String,
    pub password: String,
}

pub fn demo_seeds() -> Vec<AccountSeed> {
    vec![
        AccountSeed {
            username: "sebvet".to_string(),
            name: "Sebastian Vettel".to_string(),
            password: "astonmartin".to_string(),
        },
        AccountSeed {
            username: "babydriver".to_string(),
            name: "Ansel Elgort".to_string(),
            password: "edgarwright".to_string(),
        },
    ]
}

pub fn load_seeds(path: Option<&Path>) -> anyhow::Result<Vec<AccountSeed>> {
    let Some(path) = path else {
        tracing::warn!("No accounts file configured, seeding demo accounts");
        return Ok(demo_seeds());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading accounts file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing accounts file {}", path.display()))
}

/// Register every seed into the store
pub fn register_all(store: &mut CredentialStore, seeds: Vec<AccountSeed>) -> anyhow::Result<()> {
    for seed in seeds {
        let username = Username::try_new(seed.username.as_str())
            .with_context(|| format!("invalid username {:?}", seed.username))?;
        store.register(Identity::new(username, seed.name), &seed.password)?;
    }
    tracing::info!(accounts = store.len(), "Credential store ready");
    Ok(())
}
