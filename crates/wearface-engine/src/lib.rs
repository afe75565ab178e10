//! Wearface engine crate.
//!
//! This crate owns the watch-face core: lifecycle state, the interactive
//! tick, time-to-geometry mapping and draw-list rendering. Hosts own the
//! surface, the event thread and the timers, and talk to the core through
//! [`engine::Event`] and [`engine::Host`].

pub mod coords;
pub mod engine;
pub mod error;
pub mod face;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod schedule;
pub mod time;

pub use engine::{Engine, EngineState, Event, Host, InterruptionFilter};
pub use error::FaceError;
pub use face::{FaceResources, FaceVariant};
