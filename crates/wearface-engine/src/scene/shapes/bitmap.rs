use crate::coords::{Rect, Vec2};
use crate::raster::Raster;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Unrotated raster blit, top-left at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapCmd {
    pub raster: Raster,
    pub origin: Vec2,
}

/// Raster rotated about its centre by `degrees` (clockwise), then blitted so
/// the rotated bounding box `bounds` lands at `bounds.origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedBitmapCmd {
    pub raster: Raster,
    pub degrees: f32,
    pub bounds: Rect,
}

impl DrawList {
    /// Records a raster blit.
    #[inline]
    pub fn push_bitmap(&mut self, z: ZIndex, raster: Raster, origin: Vec2) {
        self.push(z, DrawCmd::Bitmap(BitmapCmd { raster, origin }));
    }

    /// Records a rotated raster blit.
    #[inline]
    pub fn push_rotated_bitmap(&mut self, z: ZIndex, raster: Raster, degrees: f32, bounds: Rect) {
        self.push(z, DrawCmd::RotatedBitmap(RotatedBitmapCmd { raster, degrees, bounds }));
    }
}
