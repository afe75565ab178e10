use core::ops::{Add, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `length` from `self` along a clock angle.
    ///
    /// Angle 0 points up (12 o'clock) and grows clockwise, so with +Y down:
    /// `x = cx + sin(a) * len`, `y = cy - cos(a) * len`.
    #[inline]
    pub fn along_clock_angle(self, angle: f32, length: f32) -> Self {
        Vec2::new(self.x + angle.sin() * length, self.y - angle.cos() * length)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn clock_angle_zero_points_up() {
        let p = Vec2::new(100.0, 100.0).along_clock_angle(0.0, 10.0);
        assert!(close(p, Vec2::new(100.0, 90.0)), "{p:?}");
    }

    #[test]
    fn clock_angle_quarter_points_right() {
        let p = Vec2::new(100.0, 100.0).along_clock_angle(FRAC_PI_2, 10.0);
        assert!(close(p, Vec2::new(110.0, 100.0)), "{p:?}");
    }

    #[test]
    fn clock_angle_half_points_down() {
        let p = Vec2::new(100.0, 100.0).along_clock_angle(PI, 10.0);
        assert!(close(p, Vec2::new(100.0, 110.0)), "{p:?}");
    }

    #[test]
    fn distance_is_length_of_hand() {
        let c = Vec2::new(20.0, 30.0);
        let p = c.along_clock_angle(1.234, 42.0);
        assert!((c.distance(p) - 42.0).abs() < 1e-3);
    }
}
