//! Time-to-geometry mapping.
//!
//! All angles are clock angles in radians: 0 at 12 o'clock, increasing
//! clockwise, always in `[0, 2π)`.

use core::f32::consts::{PI, TAU};

use crate::coords::{Rect, Vec2, Viewport};
use crate::time::ClockSample;

use super::HourDial;

/// Angle of a hand that sweeps half the dial every `max` units.
///
/// A full revolution is reached when `unit` cycles through `2 * max`.
#[inline]
pub fn hand_angle(unit: f32, max: f32) -> f32 {
    normalize(unit / max * PI)
}

#[inline]
fn normalize(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

/// One revolution per minute.
#[inline]
pub fn second_angle(sample: &ClockSample) -> f32 {
    hand_angle(sample.second as f32, 30.0)
}

/// One revolution per hour, stepping on whole minutes.
#[inline]
pub fn minute_angle(sample: &ClockSample) -> f32 {
    hand_angle(sample.minute as f32, 30.0)
}

/// Hour hand including the fractional hour from the minutes.
pub fn hour_angle(dial: HourDial, sample: &ClockSample) -> f32 {
    let minutes = sample.minute as f32 / 60.0;
    match dial {
        HourDial::Twelve => hand_angle(sample.hour12() as f32 + minutes, 6.0),
        HourDial::TwentyFour => hand_angle(sample.hour as f32 + minutes, 12.0),
    }
}

/// Tip of a hand of `length` pivoting on `pivot`.
#[inline]
pub fn hand_endpoint(pivot: Vec2, angle: f32, length: f32) -> Vec2 {
    pivot.along_clock_angle(angle, length)
}

/// Hand lengths in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandLengths {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

/// Per-frame geometry derived from a sample and the viewport. Never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub center: Vec2,
    /// Point the second hand turns on; not always the centre.
    pub second_pivot: Vec2,
    pub second_angle: f32,
    pub minute_angle: f32,
    pub hour_angle: f32,
    pub second_tip: Vec2,
    pub minute_tip: Vec2,
    pub hour_tip: Vec2,
}

impl Geometry {
    pub fn compute(
        viewport: Viewport,
        sample: &ClockSample,
        dial: HourDial,
        second_pivot_offset: Vec2,
        lengths: HandLengths,
    ) -> Self {
        let center = viewport.center();
        let second_pivot = center + second_pivot_offset;
        let second_angle = second_angle(sample);
        let minute_angle = minute_angle(sample);
        let hour_angle = hour_angle(dial, sample);

        Self {
            center,
            second_pivot,
            second_angle,
            minute_angle,
            hour_angle,
            second_tip: hand_endpoint(second_pivot, second_angle, lengths.second),
            minute_tip: hand_endpoint(center, minute_angle, lengths.minute),
            hour_tip: hand_endpoint(center, hour_angle, lengths.hour),
        }
    }
}

/// Rotation and placement of a horizontal hand raster.
///
/// The raster is rotated by `degrees - 180` where
/// `degrees = (deg(angle) + 90) mod 360`, then its rotated bounding box is
/// anchored by quadrant so the pivot end sits `inset` pixels past the centre.
/// Returns the applied rotation and the placed bounds.
pub fn place_rotated_hand(center: Vec2, angle: f32, size: Vec2, inset: f32) -> (f32, Rect) {
    let degrees = (angle.to_degrees() + 90.0) % 360.0;
    let rotation = degrees - 180.0;
    let bounds = Rect::rotated_bounds(size, rotation);
    let (w, h) = (bounds.size.x, bounds.size.y);

    let origin = if degrees <= 90.0 {
        Vec2::new(center.x - w + inset, center.y - h + inset)
    } else if degrees <= 180.0 {
        Vec2::new(center.x - inset, center.y - h + inset)
    } else if degrees <= 270.0 {
        Vec2::new(center.x - inset, center.y - inset)
    } else {
        Vec2::new(center.x - w + inset, center.y - inset)
    };

    (rotation, Rect::from_origin_size(origin, bounds.size))
}
