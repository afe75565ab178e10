use super::Vec2;

/// Drawable surface size in logical pixels.
///
/// The face is centred on the full viewport; a display's bottom inset
/// ("chin") is not subtracted.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport from integral surface bounds as delivered by the host.
    #[inline]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Geometric centre (float division).
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Integral size, used as the key of the background rescale cache.
    #[inline]
    pub fn pixel_size(self) -> (u32, u32) {
        (self.width.max(0.0).round() as u32, self.height.max(0.0).round() as u32)
    }
}
