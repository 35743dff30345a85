//! Token-gated roster operations
//!
//! Every mutation validates the caller's token first and acts on the
//! identity the token resolves to; the request never names the driver.

use std::sync::Arc;
use types::driver::Driver;
use types::errors::FareError;

use crate::store::RosterStore;
use crate::validator::TokenValidator;

pub struct Roster {
    validator: Arc<dyn TokenValidator>,
    store: RosterStore,
}

impl Roster {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            validator,
            store: RosterStore::new(),
        }
    }

    pub async fn join(&self, token: &str, rate: i64) -> Result<Driver, FareError> {
        let identity = self.validator.validate(token).await?;
        let driver = self.store.join(identity, rate)?;

        tracing::info!(username = %driver.username, rate = %driver.rate, "Driver joined roster");
        Ok(driver)
    }

    pub async fn leave(&self, token: &str) -> Result<(), FareError> {
        let identity = self.validator.validate(token).await?;
        let driver = self.store.leave(&identity.username)?;

        tracing::info!(username = %driver.username, "Driver left roster");
        Ok(())
    }

    pub async fn update_rate(&self, token: &str, rate: i64) -> Result<Driver, FareError> {
        let identity = self.validator.validate(token).await?;
        let driver = self.store.update_rate(&identity.username, rate)?;

        tracing::info!(username = %driver.username, rate = %driver.rate, "Driver rate changed");
        Ok(driver)
    }

    pub fn list(&self) -> Vec<Driver> {
        self.store.list()
    }

    pub fn cheapest(&self) -> Result<Driver, FareError> {
        self.store.cheapest()
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }
}
