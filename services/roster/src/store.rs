//! Roster Store
//!
//! The only shared mutable state in the platform. Entries live in a sharded
//! `DashMap`: the membership check and the mutation for one username happen
//! under that key's shard lock, so concurrent requests for the same driver
//! are serialized while different drivers proceed in parallel. A `Driver`
//! is fully built before it is inserted, so readers never see a partial one.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use types::driver::{cheapest, Driver, Rate};
use types::errors::FareError;
use types::identity::Identity;
use types::ids::Username;

#[derive(Debug, Default)]
pub struct RosterStore {
    drivers: DashMap<Username, Driver>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a driver. Membership is checked before the rate.
    pub fn join(&self, identity: Identity, rate: i64) -> Result<Driver, FareError> {
        match self.drivers.entry(identity.username.clone()) {
            Entry::Occupied(_) => Err(FareError::DuplicateMembership {
                username: identity.username,
            }),
            Entry::Vacant(slot) => {
                let driver = Driver::new(identity, Rate::new(rate)?);
                slot.insert(driver.clone());
                Ok(driver)
            }
        }
    }

    pub fn leave(&self, username: &Username) -> Result<Driver, FareError> {
        self.drivers
            .remove(username)
            .map(|(_, driver)| driver)
            .ok_or_else(|| FareError::NotInRoster {
                username: username.clone(),
            })
    }

    /// Replace a member's rate. Membership is checked before the rate.
    pub fn update_rate(&self, username: &Username, rate: i64) -> Result<Driver, FareError> {
        let mut driver = self
            .drivers
            .get_mut(username)
            .ok_or_else(|| FareError::NotInRoster {
                username: username.clone(),
            })?;
        driver.rate = Rate::new(rate)?;
        Ok(driver.clone())
    }

    pub fn get(&self, username: &Username) -> Option<Driver> {
        self.drivers.get(username).map(|entry| entry.value().clone())
    }

    /// Snapshot copy of every entry. Order is unspecified.
    pub fn list(&self) -> Vec<Driver> {
        self.drivers
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn cheapest(&self) -> Result<Driver, FareError> {
        let snapshot = self.list();
        cheapest(&snapshot)
            .cloned()
            .ok_or(FareError::NoDriversAvailable)
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(username: &str) -> Identity {
        Identity::new(Username::new(username), format!("{username} name"))
    }

    #[test]
    fn test_join_inserts_driver() {
        let store = RosterStore::new();
        let driver = store.join(identity("sebvet"), 5).unwrap();

        assert_eq!(driver.rate.get(), 5);
        assert_eq!(driver.name, "sebvet name");
        assert_eq!(store.get(&Username::new("sebvet")), Some(driver));
    }

    #[test]
    fn test_duplicate_join_rejected() {
        let store = RosterStore::new();
        store.join(identity("sebvet"), 5).unwrap();

        let err = store.join(identity("sebvet"), 7).unwrap_err();
        assert_eq!(
            err,
            FareError::DuplicateMembership {
                username: Username::new("sebvet")
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&Username::new("sebvet")).unwrap().rate.get(), 5);
    }

    #[test]
    fn test_duplicate_wins_over_invalid_rate() {
        let store = RosterStore::new();
        store.join(identity("sebvet"), 5).unwrap();
        assert!(matches!(
            store.join(identity("sebvet"), 0),
            Err(FareError::DuplicateMembership { .. })
        ));
    }

    #[test]
    fn test_join_with_invalid_rate_leaves_store_unchanged() {
        let store = RosterStore::new();
        assert_eq!(
            store.join(identity("sebvet"), 0),
            Err(FareError::InvalidRate { rate: 0 })
        );
        assert_eq!(
            store.join(identity("sebvet"), -10),
            Err(FareError::InvalidRate { rate: -10 })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_leave_and_update_on_absent_entry() {
        let store = RosterStore::new();
        let name = Username::new("ghost");
        assert_eq!(
            store.leave(&name),
            Err(FareError::NotInRoster {
                username: name.clone()
            })
        );
        assert_eq!(
            store.update_rate(&name, 3),
            Err(FareError::NotInRoster { username: name })
        );
    }

    #[test]
    fn test_update_rate_validates_rate() {
        let store = RosterStore::new();
        store.join(identity("sebvet"), 5).unwrap();

        assert_eq!(
            store.update_rate(&Username::new("sebvet"), -1),
            Err(FareError::InvalidRate { rate: -1 })
        );
        assert_eq!(store.get(&Username::new("sebvet")).unwrap().rate.get(), 5);
    }

    #[test]
    fn test_leave_removes_from_list_and_cheapest() {
        let store = RosterStore::new();
        store.join(identity("cheap"), 1).unwrap();
        store.join(identity("dear"), 10).unwrap();

        let removed = store.leave(&Username::new("cheap")).unwrap();
        assert_eq!(removed.rate.get(), 1);

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|d| d.username.as_str() != "cheap"));
        assert_eq!(store.cheapest().unwrap().username.as_str(), "dear");
    }

    #[test]
    fn test_cheapest() {
        let store = RosterStore::new();
        assert_eq!(store.cheapest(), Err(FareError::NoDriversAvailable));

        store.join(identity("ten"), 10).unwrap();
        store.join(identity("five"), 5).unwrap();
        assert_eq!(store.cheapest().unwrap().rate.get(), 5);
    }

    #[test]
    fn test_join_update_list_round_trip() {
        let store = RosterStore::new();
        store.join(identity("sebvet"), 5).unwrap();
        store.update_rate(&Username::new("sebvet"), 8).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].rate.get(), 8);
    }
}
