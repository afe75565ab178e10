//! Coordinate and geometry types shared by the face renderer and hosts.
//!
//! Canonical space:
//! - Logical pixels of the watch surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! Clock angles are measured from 12 o'clock, clockwise, so "up" is `-Y`.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
