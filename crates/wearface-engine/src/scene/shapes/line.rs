use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub paint: Paint,
}

impl DrawList {
    /// Records a stroked line.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, paint: Paint) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, paint }));
    }
}
