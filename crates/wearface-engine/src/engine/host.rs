use std::time::Duration;

use crate::schedule::TaskToken;

/// Outbound requests the engine makes of its host.
///
/// All calls happen synchronously from inside [`Engine::handle`](super::Engine::handle),
/// on the host's single event thread.
pub trait Host {
    /// Requests a redraw at the next frame opportunity. Hosts may coalesce.
    fn invalidate(&mut self);

    /// Delivers [`Event::TickFired(token)`](super::Event::TickFired) after `delay`.
    fn schedule_delayed(&mut self, token: TaskToken, delay: Duration);

    /// Drops a scheduled tick before it fires.
    fn cancel(&mut self, token: TaskToken);

    /// Starts delivering [`Event::TimezoneChanged`](super::Event::TimezoneChanged).
    fn register_timezone_receiver(&mut self) {}

    /// Stops delivering timezone changes.
    fn unregister_timezone_receiver(&mut self) {}
}
