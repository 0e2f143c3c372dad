//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Compiled
//! for tests and when the `test-support` feature is enabled.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::StoreRegistry;
use crate::outbound::memory::build_stores;

/// Clock frozen at a chosen instant until advanced.
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock frozen at midday UTC on the given date.
    ///
    /// # Panics
    /// Panics if the date is not a valid calendar date.
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        match Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single() {
            Some(now) => Self::new(now),
            None => panic!("invalid fixed clock date {year}-{month}-{day}"),
        }
    }

    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Registry with freshly built in-memory stores installed.
///
/// # Panics
/// Panics if the built-in mock records fail validation.
pub fn installed_registry(clock: Arc<dyn Clock>, seed_mock_data: bool) -> Arc<StoreRegistry> {
    match build_stores(clock, seed_mock_data) {
        Ok(stores) => Arc::new(StoreRegistry::with_stores(stores)),
        Err(error) => panic!("mock fixtures should validate: {error}"),
    }
}
