use crate::Result;
use jiff::Timestamp;
use std::fmt;

/// Source of "now".
///
/// Timestamp fields read the clock when resolving relative input such as
/// `"+1 day"` and when auto-stamping on save.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn new(now: Timestamp) -> FixedClock {
        FixedClock(now)
    }

    /// Creates a clock fixed at the given number of seconds since the epoch.
    pub fn from_second(second: i64) -> Result<FixedClock> {
        Ok(FixedClock(Timestamp::from_second(second)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
