use std::sync::Mutex;

use chrono::{DateTime, Utc};

/// Time source for the use-case layer.
///
/// The one-check-in-per-day rule hangs off "today", so use-cases never read
/// the wall clock directly; tests freeze and advance time through this port.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the running service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the frozen time, e.g. to the next calendar day.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock poisoned") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_clock_stays_frozen() {
        let frozen = Utc.with_ymd_and_hms(2022, 1, 10, 8, 0, 0).unwrap();
        let clock = FixedClock::new(frozen);
        assert_eq!(clock.now(), frozen);
        assert_eq!(clock.now(), frozen);
    }

    #[test]
    fn test_fixed_clock_can_advance() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2022, 1, 10, 8, 0, 0).unwrap());
        let later = Utc.with_ymd_and_hms(2022, 1, 12, 8, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
