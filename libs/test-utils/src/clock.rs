use std::sync::{Arc, Mutex, PoisonError};

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc,
};
use mockable::Clock;

/// A clock frozen on a local wall-clock time. Clones share the same time,
/// so a test can move a clock that a handler already holds.
#[derive(Debug, Clone)]
pub struct FixedClock(Arc<Mutex<NaiveDateTime>>);

impl FixedClock {
    pub fn new(local_time: NaiveDateTime) -> Self {
        Self(Arc::new(Mutex::new(local_time)))
    }

    /// Local noon on `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }

    fn wall_time(&self) -> NaiveDateTime {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        let wall_time = self.wall_time();
        Local
            .from_local_datetime(&wall_time)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&wall_time))
    }

    fn utc(&self) -> DateTime<Utc> { self.local().with_timezone(&Utc) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let clock = FixedClock::at_date(date);
        let shared = clock.clone();

        assert_eq!(clock.local().date_naive(), date);

        clock.advance(TimeDelta::days(1));
        assert_eq!(shared.local().date_naive(), date.succ_opt().unwrap());
    }
}
