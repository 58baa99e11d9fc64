use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// "Today", "this month" and override expiry all read the clock, so tests
/// can pin time instead of racing the system clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
