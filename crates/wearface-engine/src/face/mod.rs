//! The watch face itself: variants, fixed visual style, hand geometry and
//! the renderer that turns a clock sample into a draw list.
//!
//! Rendering is a pure function of `(viewport, sample, state, paints)` plus
//! one explicit cache, the background rescaled to the current viewport.

pub mod geometry;
pub mod style;

mod renderer;
mod resources;
mod variant;

pub use geometry::{Geometry, HandLengths};
pub use renderer::FaceRenderer;
pub use resources::{FaceResources, HandRasters};
pub use style::PaintSet;
pub use variant::{FaceVariant, HandStyle, HourDial};
