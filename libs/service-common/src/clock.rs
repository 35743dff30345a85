//! Wall clock abstraction
//!
//! Token expiry and the night surcharge both depend on the current time;
//! services take an `Arc<dyn Clock>` so tests can pin it.

use chrono::{DateTime, Local, TimeDelta, Timelike, Utc};
use parking_lot::RwLock;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) in the service's local time zone
    fn local_hour(&self) -> u32;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock that only moves when told to. Its local zone is UTC.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Clock set to the given hour of an arbitrary fixed day
    pub fn at_hour(hour: u32) -> Self {
        let midnight = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000);
        Self::new(midnight + TimeDelta::hours(i64::from(hour)))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.write();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }

    fn local_hour(&self) -> u32 {
        self.now.read().hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at_hour(22);
        assert_eq!(clock.local_hour(), 22);

        clock.advance(TimeDelta::hours(3));
        assert_eq!(clock.local_hour(), 1);
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::at_hour(0);
        let later = clock.now() + TimeDelta::minutes(90);
        clock.set(later);
        assert_eq!(clock.now(), later);
        assert_eq!(clock.local_hour(), 1);
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        assert!(SystemClock.local_hour() < 24);
    }
}
