use super::Color;

/// Stroke end decoration.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Cap {
    #[default]
    Butt,
    Round,
}

/// Stroke and text paint state for one draw command.
///
/// Paints are plain values. The face derives a fresh set from the engine
/// state whenever a relevant flag flips instead of mutating shared paints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Stroke width in logical pixels.
    pub stroke_width: f32,
    pub cap: Cap,
    /// Text size in logical pixels; ignored by line commands.
    pub text_size: f32,
    pub anti_alias: bool,
}

impl Paint {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            stroke_width: 1.0,
            cap: Cap::Butt,
            text_size: 12.0,
            anti_alias: true,
        }
    }

    #[inline]
    pub const fn stroke(self, width: f32, cap: Cap) -> Self {
        Self { stroke_width: width, cap, ..self }
    }

    #[inline]
    pub const fn text_size(self, size: f32) -> Self {
        Self { text_size: size, ..self }
    }

    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { color: self.color.with_alpha(alpha), ..self }
    }

    #[inline]
    pub const fn with_anti_alias(self, anti_alias: bool) -> Self {
        Self { anti_alias, ..self }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.color.a == u8::MAX
    }
}
