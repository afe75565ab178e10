//! Fixed visual constants and the paint set derived from engine state.

use crate::coords::Vec2;
use crate::engine::EngineState;
use crate::paint::{Cap, Color, Paint};

pub const SECOND_COLOR: Color = Color::from_rgb(55, 204, 230);
pub const TEXT_COLOR: Color = Color::from_rgb(15, 164, 190);
pub const MONTH_COLOR: Color = Color::from_rgb(55, 204, 230);
pub const HAND_COLOR: Color = Color::from_rgb(235, 240, 242);

pub const SECOND_STROKE: f32 = 2.0;
pub const MINUTE_STROKE: f32 = 4.0;
pub const HOUR_STROKE: f32 = 6.0;

pub const DAY_TEXT_SIZE: f32 = 28.0;
pub const WEEKDAY_TEXT_SIZE: f32 = 20.0;
pub const MONTH_TEXT_SIZE: f32 = 24.0;

/// Text baselines, relative to the centre.
pub const DAY_OFFSET: Vec2 = Vec2::new(4.0, -25.0);
pub const WEEKDAY_OFFSET: Vec2 = Vec2::new(35.0, 45.0);
pub const MONTH_OFFSET: Vec2 = Vec2::new(0.0, -55.0);

/// Alphas while an interruption filter mutes the face.
pub const MUTED_TEXT_ALPHA: u8 = 100;
pub const MUTED_MONTH_ALPHA: u8 = 100;
pub const MUTED_SECOND_ALPHA: u8 = 80;
pub const MUTED_HAND_ALPHA: u8 = 100;

/// Line hands: length is `centerX - inset`.
pub const SECOND_INSET: f32 = 20.0;
pub const MINUTE_INSET: f32 = 40.0;
pub const HOUR_INSET: f32 = 80.0;

/// Bitmap face: the second hand turns on a sub-dial left of and below the centre.
pub const SUB_DIAL_OFFSET: Vec2 = Vec2::new(-48.0, 15.0);
pub const SUB_DIAL_SECOND_INSET: f32 = 135.0;

/// Bitmap hands, scaled at load time.
pub const MINUTE_HAND_SIZE: (u32, u32) = (131, 4);
pub const HOUR_HAND_SIZE: (u32, u32) = (84, 8);
/// Distance from the bitmap's pivot end to the centre point.
pub const MINUTE_PIVOT_INSET: f32 = 2.0;
pub const HOUR_PIVOT_INSET: f32 = 4.0;

/// Every paint the faces use, for one combination of state flags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintSet {
    pub second: Paint,
    pub minute: Paint,
    pub hour: Paint,
    pub day: Paint,
    pub weekday: Paint,
    pub month: Paint,
}

impl PaintSet {
    /// Paints for `state`.
    ///
    /// - anti-aliasing is off iff ambient on a low-bit display
    /// - alphas drop to their muted values iff muted, regardless of ambient
    pub fn derive(state: &EngineState) -> Self {
        let anti_alias = !(state.ambient_mode && state.low_bit_ambient);
        let alpha = |muted_alpha: u8| if state.muted { muted_alpha } else { u8::MAX };

        let text = Paint::new(TEXT_COLOR).with_anti_alias(anti_alias);
        let hand = Paint::new(HAND_COLOR).with_anti_alias(anti_alias);

        Self {
            second: Paint::new(SECOND_COLOR)
                .stroke(SECOND_STROKE, Cap::Round)
                .with_alpha(alpha(MUTED_SECOND_ALPHA))
                .with_anti_alias(anti_alias),
            minute: hand.stroke(MINUTE_STROKE, Cap::Round).with_alpha(alpha(MUTED_HAND_ALPHA)),
            hour: hand.stroke(HOUR_STROKE, Cap::Round).with_alpha(alpha(MUTED_HAND_ALPHA)),
            day: text.text_size(DAY_TEXT_SIZE).with_alpha(alpha(MUTED_TEXT_ALPHA)),
            weekday: text.text_size(WEEKDAY_TEXT_SIZE).with_alpha(alpha(MUTED_TEXT_ALPHA)),
            month: Paint::new(MONTH_COLOR)
                .text_size(MONTH_TEXT_SIZE)
                .with_alpha(alpha(MUTED_MONTH_ALPHA))
                .with_anti_alias(anti_alias),
        }
    }

    pub fn all(&self) -> [Paint; 6] {
        [self.second, self.minute, self.hour, self.day, self.weekday, self.month]
    }
}
