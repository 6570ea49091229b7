use chrono::{DateTime, Datelike, Utc};

/// Source of "now" for rules that depend on the calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Number of quarters of `at`'s year that are already over (0..=3).
pub fn completed_quarters(at: &DateTime<Utc>) -> i32 {
    (at.month0() / 3) as i32
}
