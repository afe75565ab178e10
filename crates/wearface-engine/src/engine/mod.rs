//! Engine-facing contracts.
//!
//! This module defines the interface between a host platform (surface,
//! serial event queue, timers, broadcasts) and the watch face. Host callbacks
//! arrive as [`Event`]s, go through one state-transition function, and the
//! engine answers with requests on the [`Host`] trait.

mod engine;
mod event;
mod host;
mod state;

pub use engine::Engine;
pub use event::Event;
pub use host::Host;
pub use state::{EngineState, InterruptionFilter};
