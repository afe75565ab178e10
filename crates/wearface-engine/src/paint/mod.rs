//! Paint model shared between the face renderer and hosts.
//!
//! Scope:
//! - color representation (straight sRGB bytes with alpha)
//! - stroke/text paint state (width, cap, text size, anti-aliasing)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod paint;

pub use color::Color;
pub use paint::{Cap, Paint};
