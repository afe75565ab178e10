//! Time subsystem.
//!
//! Provides wall-clock sampling and tick phase alignment without coupling to
//! any host:
//! - a `Clock` yields a fresh `ClockSample` per redraw (never cached)
//! - `next_tick_delay` aligns the interactive tick to second boundaries

mod clock;
mod sample;
mod tick;

pub use clock::{Clock, FixedClock, SystemClock};
pub use sample::ClockSample;
pub use tick::{next_tick_delay, AMBIENT_UPDATE_RATE, INTERACTIVE_UPDATE_RATE};
