use crate::coords::Viewport;
use crate::schedule::TaskToken;

use super::InterruptionFilter;

/// Host callbacks, one variant each.
///
/// Events are delivered serially and never re-entrantly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    /// The face instance was attached to a surface.
    Create { surface: Viewport },
    /// The face instance is going away.
    Destroy,
    /// Display capabilities became known.
    PropertiesChanged { low_bit_ambient: bool },
    /// Once-per-minute callback; the only redraw driver in ambient mode.
    TimeTick,
    AmbientModeChanged(bool),
    InterruptionFilterChanged(InterruptionFilter),
    VisibilityChanged(bool),
    /// The system time zone changed (only while registered).
    TimezoneChanged,
    /// A tick scheduled via [`Host::schedule_delayed`](super::Host::schedule_delayed) is due.
    TickFired(TaskToken),
    /// The host asks for a frame of the given size.
    Draw(Viewport),
}
