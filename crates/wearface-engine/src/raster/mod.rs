//! Decoded image resources and the background rescale cache.
//!
//! Rasters are opaque to the engine: it only sizes, scales and hands them to
//! the host inside draw commands. Decoding happens once at load time.

mod cache;
mod raster;

pub use cache::BackgroundCache;
pub use raster::Raster;
