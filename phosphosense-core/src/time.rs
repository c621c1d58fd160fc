//! Clock abstraction for reading timestamps
//!
//! Generation never reads the wall clock directly. Callers hand in a
//! [`Clock`]:
//! - [`SystemClock`] for live dashboards
//! - [`FixedClock`] for tests and reproducible runs

use chrono::{DateTime, Duration, Utc};

use crate::constants::SECONDS_PER_HOUR;

/// Source of "now" for generated readings
pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Whether this clock follows real wall-clock time
    fn is_wall_clock(&self) -> bool;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Clock frozen at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Move the clock to a new instant
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    /// Move the clock forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Duration of `hours` whole hours, if representable
pub fn hours(hours: u32) -> Option<Duration> {
    Duration::try_seconds(i64::from(hours) * SECONDS_PER_HOUR)
}

/// The instant `window` hours before `now`, if representable
pub fn hours_before(now: DateTime<Utc>, window: u32) -> Option<DateTime<Utc>> {
    hours(window).and_then(|span| now.checked_sub_signed(span))
}
