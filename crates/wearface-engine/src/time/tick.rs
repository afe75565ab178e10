use std::time::Duration;

/// Redraw period while visible and interactive.
pub const INTERACTIVE_UPDATE_RATE: Duration = Duration::from_secs(1);

/// Period of the host's ambient `TimeTick` callback.
pub const AMBIENT_UPDATE_RATE: Duration = Duration::from_secs(60);

/// Delay until the next multiple of `interval` after `now_millis`.
///
/// `interval - (now mod interval)`: ticks land on wall-clock boundaries
/// instead of drifting with whenever the timer first started. A tick that
/// fires exactly on a boundary waits a full interval.
pub fn next_tick_delay(now_millis: i64, interval: Duration) -> Duration {
    let interval_ms = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX).max(1);
    let phase = now_millis.rem_euclid(interval_ms);
    Duration::from_millis((interval_ms - phase).unsigned_abs())
}
