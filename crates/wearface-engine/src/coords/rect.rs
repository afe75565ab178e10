use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Closed containment: [min, max].
    ///
    /// Hand pivots sit exactly on a bitmap edge, so the max edge counts.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x <= max.x && p.y <= max.y
    }

    /// Bounding box of `size` rotated by `degrees` about its centre.
    ///
    /// Dimensions are rounded to whole pixels, as a raster rotated into a new
    /// bitmap would be. Only the size is meaningful; the origin is left at
    /// zero for the caller to place.
    pub fn rotated_bounds(size: Vec2, degrees: f32) -> Rect {
        let rad = degrees.to_radians();
        let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
        Rect::new(
            0.0,
            0.0,
            (size.x * cos + size.y * sin).round(),
            (size.x * sin + size.y * cos).round(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_edges_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 11.0)));
    }

    // ── rotated_bounds ────────────────────────────────────────────────────

    #[test]
    fn rotated_bounds_identity() {
        let b = Rect::rotated_bounds(Vec2::new(131.0, 4.0), 0.0);
        assert_eq!(b.size, Vec2::new(131.0, 4.0));
    }

    #[test]
    fn rotated_bounds_quarter_turn_swaps_axes() {
        let b = Rect::rotated_bounds(Vec2::new(84.0, 8.0), 90.0);
        assert_eq!(b.size, Vec2::new(8.0, 84.0));
    }

    #[test]
    fn rotated_bounds_diagonal_grows() {
        let b = Rect::rotated_bounds(Vec2::new(100.0, 0.0), 45.0);
        assert_eq!(b.size, Vec2::new(71.0, 71.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
