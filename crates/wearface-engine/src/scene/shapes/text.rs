use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Single-line text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Left end of the baseline in logical pixels.
    pub origin: Vec2,
    /// Size comes from `paint.text_size`.
    pub paint: Paint,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, z: ZIndex, text: impl Into<String>, origin: Vec2, paint: Paint) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), origin, paint }));
    }
}
