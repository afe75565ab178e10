use std::time::Duration;

use wearface_engine::Host;
use wearface_engine::schedule::{TaskQueue, TaskToken};

/// Single-threaded stand-in for the watch platform.
///
/// Delayed ticks live in a [`TaskQueue`]; redraw requests collapse into one
/// pending frame; timezone registration is only tracked, since the desktop
/// never broadcasts zone changes.
#[derive(Debug, Default)]
pub struct StudioHost {
    queue: TaskQueue<()>,
    now: i64,
    redraw: bool,
    timezone_registered: bool,
}

impl StudioHost {
    pub fn new(now: i64) -> Self {
        Self { now, ..Self::default() }
    }

    /// Advances the host's notion of "now". Delays are measured from here.
    #[inline]
    pub fn set_now(&mut self, now: i64) {
        self.now = now;
    }

    /// Clears and returns the pending redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn pop_due(&mut self) -> Option<TaskToken> {
        self.queue.pop_due(self.now).map(|(token, ())| token)
    }

    pub fn next_due(&self) -> Option<i64> {
        self.queue.next_due()
    }

    #[inline]
    pub fn timezone_registered(&self) -> bool {
        self.timezone_registered
    }
}

impl Host for StudioHost {
    fn invalidate(&mut self) {
        self.redraw = true;
    }

    fn schedule_delayed(&mut self, token: TaskToken, delay: Duration) {
        log::trace!("{token} due in {delay:?}");
        self.queue.post_delayed(self.now, delay, token, ());
    }

    fn cancel(&mut self, token: TaskToken) {
        if self.queue.cancel(token) > 0 {
            log::trace!("{token} cancelled");
        }
    }

    fn register_timezone_receiver(&mut self) {
        log::debug!("timezone receiver registered");
        self.timezone_registered = true;
    }

    fn unregister_timezone_receiver(&mut self) {
        log::debug!("timezone receiver unregistered");
        self.timezone_registered = false;
    }
}
