use std::fmt;
use std::time::Duration;

use crate::engine::{EngineState, Host};
use crate::time::{next_tick_delay, INTERACTIVE_UPDATE_RATE};

/// Identity of one scheduled tick. Fresh for every schedule request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TaskToken(u64);

impl TaskToken {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Interactive redraw timer.
///
/// The tick is self-terminating rather than fixed-rate: each firing requests
/// one redraw and reschedules only if the timer should still run, so a
/// visibility or ambient change between firings needs no extra coordination.
#[derive(Debug)]
pub struct TickScheduler {
    pending: Option<TaskToken>,
    next_id: u64,
    interval: Duration,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::with_interval(INTERACTIVE_UPDATE_RATE)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { pending: None, next_id: 0, interval }
    }

    /// The tick runs only while visible and interactive.
    #[inline]
    pub fn should_run(state: &EngineState) -> bool {
        state.visible && !state.ambient_mode
    }

    #[inline]
    pub fn pending(&self) -> Option<TaskToken> {
        self.pending
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Re-evaluates the timer after a state change.
    ///
    /// Starts an immediate tick when the timer should run and none is
    /// pending; cancels the pending tick when it should not run. Calling it
    /// repeatedly with unchanged state leaves at most one tick pending.
    pub fn update_timer<H: Host + ?Sized>(&mut self, state: &EngineState, host: &mut H) {
        if Self::should_run(state) {
            if self.pending.is_none() {
                self.schedule(Duration::ZERO, host);
            }
        } else {
            self.cancel(host);
        }
    }

    /// Handles a fired tick.
    ///
    /// Returns `false` for a token that is no longer pending; such a tick
    /// neither redraws nor reschedules.
    pub fn on_tick<H: Host + ?Sized>(
        &mut self,
        token: TaskToken,
        now_millis: i64,
        state: &EngineState,
        host: &mut H,
    ) -> bool {
        if self.pending != Some(token) {
            log::warn!("ignoring stale {token} (pending: {:?})", self.pending);
            return false;
        }
        self.pending = None;

        host.invalidate();

        if Self::should_run(state) {
            self.schedule(next_tick_delay(now_millis, self.interval), host);
        } else {
            log::debug!("{token} fired; timer stops");
        }
        true
    }

    /// Cancels the pending tick, if any.
    pub fn cancel<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.pending.take() {
            log::debug!("cancelling {token}");
            host.cancel(token);
        }
    }

    fn schedule<H: Host + ?Sized>(&mut self, delay: Duration, host: &mut H) {
        let token = TaskToken(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::trace!("scheduling {token} in {delay:?}");
        host.schedule_delayed(token, delay);
        self.pending = Some(token);
    }
}
