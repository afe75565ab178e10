use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

/// Time of day and date labels read from the clock for one redraw.
///
/// Derived fresh on every frame and never cached across redraws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSample {
    /// Hour of day, 0–23.
    pub hour: u32,
    /// 0–59.
    pub minute: u32,
    /// 0–59.
    pub second: u32,
    day: String,
    weekday: String,
    month: String,
}

impl ClockSample {
    /// Sample of `t` in its own zone.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self::from_naive(&t.naive_local())
    }

    /// Sample of a wall-clock reading with no zone attached.
    pub fn from_naive(t: &NaiveDateTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
            day: t.format("%d").to_string(),
            weekday: t.format("%a").to_string(),
            month: t.format("%b").to_string(),
        }
    }

    /// Sample at a time of day on Thursday 1 January 1970.
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour % 24, minute % 60, second % 60).unwrap_or_default();
        Self::from_naive(&NaiveDate::default().and_time(time))
    }

    /// Hour on a 12-hour dial, 0–11.
    #[inline]
    pub fn hour12(&self) -> u32 {
        self.hour % 12
    }

    /// Two-digit day of month ("07").
    #[inline]
    pub fn day_label(&self) -> &str {
        &self.day
    }

    /// Abbreviated English weekday ("Tue").
    #[inline]
    pub fn weekday_label(&self) -> &str {
        &self.weekday
    }

    /// Abbreviated English month ("Mar").
    #[inline]
    pub fn month_label(&self) -> &str {
        &self.month
    }
}
