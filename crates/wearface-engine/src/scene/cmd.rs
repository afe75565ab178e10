use crate::scene::shapes::bitmap::{BitmapCmd, RotatedBitmapCmd};
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new command module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that module
/// - teach hosts to rasterize it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Bitmap(BitmapCmd),
    RotatedBitmap(RotatedBitmapCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short command name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Bitmap(_) => "bitmap",
            DrawCmd::RotatedBitmap(_) => "rotated-bitmap",
            DrawCmd::Line(_) => "line",
            DrawCmd::Text(_) => "text",
        }
    }
}
