//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - provide deterministic ordering (z-index + insertion order)
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{BitmapCmd, LineCmd, RotatedBitmapCmd, TextCmd};
pub use z_index::ZIndex;
