use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

use super::ClockSample;

/// Source of wall-clock time for the engine.
///
/// Hosts inject the clock so tests and simulators can drive time explicitly.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Calendar fields in the current local zone.
    fn sample(&self) -> ClockSample;
}

/// System wall clock in the local time zone.
///
/// The zone is re-read on every call, so a timezone change takes effect at
/// the next sample without any cached calendar to reset.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn sample(&self) -> ClockSample {
        ClockSample::from_datetime(&Local::now())
    }
}

/// Manually driven clock.
///
/// Clones share the same instant, so a test can keep a handle after moving
/// the clock into an engine.
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Rc<Cell<i64>>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Clock at `millis` since the epoch, in UTC.
    pub fn at_millis(millis: i64) -> Self {
        Self { millis: Rc::new(Cell::new(millis)), offset: Utc.fix() }
    }

    /// Clock at a naive local date-time, in UTC.
    pub fn at(datetime: NaiveDateTime) -> Self {
        Self::at_millis(datetime.and_utc().timestamp_millis())
    }

    /// Same instant viewed from another zone.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, by: Duration) {
        let step = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.set(self.millis.get().saturating_add(step));
    }

    fn datetime(&self) -> DateTime<FixedOffset> {
        DateTime::<Utc>::from_timestamp_millis(self.millis.get())
            .unwrap_or_default()
            .with_timezone(&self.offset)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn sample(&self) -> ClockSample {
        ClockSample::from_datetime(&self.datetime())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn clones_share_the_instant() {
        let clock = FixedClock::at(noon());
        let handle = clock.clone();
        handle.advance(Duration::from_secs(90));
        let s = clock.sample();
        assert_eq!((s.hour, s.minute, s.second), (12, 1, 30));
    }

    #[test]
    fn offset_shifts_calendar_not_instant() {
        let utc = FixedClock::at(noon());
        let east = utc.clone().with_offset(FixedOffset::east_opt(3 * 3600).unwrap());
        assert_eq!(utc.now_millis(), east.now_millis());
        assert_eq!(east.sample().hour, 15);
    }

    #[test]
    fn system_clock_is_sane() {
        let clock = SystemClock;
        assert!(clock.now_millis() > 1_600_000_000_000);
        assert!(clock.sample().hour < 24);
    }
}
