pub(crate) mod bitmap;
pub(crate) mod line;
pub(crate) mod text;

pub use bitmap::{BitmapCmd, RotatedBitmapCmd};
pub use line::LineCmd;
pub use text::TextCmd;
