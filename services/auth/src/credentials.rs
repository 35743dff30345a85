//! Credential store
//!
//! Accounts are registered once at startup and never change afterwards.
//! Passwords are stored as Argon2id PHC strings; verification goes through
//! `PasswordVerifier`, whose digest comparison is constant time.
//!
//! Unknown usernames are verified against a decoy hash built with the same
//! parameters, so they cost the same work as a wrong password and produce
//! the same error.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::collections::HashMap;
use thiserror::Error;
use types::errors::FareError;
use types::identity::Identity;
use types::ids::Username;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("invalid Argon2 parameters: {0}")]
    InvalidParams(String),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
    #[error("account {0} is already registered")]
    DuplicateAccount(Username),
}

impl From<argon2::password_hash::Error> for CredentialError {
    fn from(err: argon2::password_hash::Error) -> Self {
        CredentialError::PasswordHash(err.to_string())
    }
}

#[derive(Debug, Clone)]
struct Account {
    identity: Identity,
    password_hash: String,
}

#[derive(Debug)]
pub struct CredentialStore {
    accounts: HashMap<Username, Account>,
    argon2: Argon2<'static>,
    decoy_hash: String,
}

impl CredentialStore {
    /// Store with default Argon2id parameters
    pub fn new() -> Result<Self, CredentialError> {
        Self::with_params(Params::default())
    }

    /// Store with caller-specified Argon2 parameters (cheap ones for tests)
    pub fn with_params(params: Params) -> Result<Self, CredentialError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let decoy_hash = hash_with(&argon2, "decoy-password-never-matches")?;
        Ok(Self {
            accounts: HashMap::new(),
            argon2,
            decoy_hash,
        })
    }

    /// Argon2 parameters small enough for unit tests
    pub fn test_params() -> Result<Params, CredentialError> {
        Params::new(Params::MIN_M_COST, 1, 1, None)
            .map_err(|err| CredentialError::InvalidParams(err.to_string()))
    }

    /// Register an account, hashing its password
    pub fn register(&mut self, identity: Identity, password: &str) -> Result<(), CredentialError> {
        if self.accounts.contains_key(&identity.username) {
            return Err(CredentialError::DuplicateAccount(identity.username));
        }
        let password_hash = hash_with(&self.argon2, password)?;
        self.accounts.insert(
            identity.username.clone(),
            Account {
                identity,
                password_hash,
            },
        );
        Ok(())
    }

    /// Check a username/password pair.
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    pub fn verify(&self, username: &str, password: &str) -> Result<Identity, FareError> {
        let account = self.accounts.get(username);
        let hash = account.map_or(self.decoy_hash.as_str(), |a| a.password_hash.as_str());

        let matches = PasswordHash::new(hash)
            .map(|parsed| {
                self.argon2
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false);

        match account {
            Some(account) if matches => Ok(account.identity.clone()),
            _ => Err(FareError::InvalidCredentials),
        }
    }

    pub fn identity(&self, username: &str) -> Option<&Identity> {
        self.accounts.get(username).map(|a| &a.identity)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn hash_with(argon2: &Argon2<'static>, password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}
