use std::fmt;

/// How the hour hand maps the time of day onto the dial.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HourDial {
    /// One revolution per 12 hours, driven by the 0–11 hour.
    Twelve,
    /// One revolution per 24 hours, driven by the 0–23 hour of day.
    TwentyFour,
}

/// How the minute and hour hands are drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandStyle {
    /// Stroked lines from the centre.
    Lines,
    /// Pre-scaled rasters rotated about the centre.
    Bitmaps,
}

/// The selectable faces.
///
/// They differ in observable ways (hour-hand speed, hand artwork) and are
/// kept as distinct variants rather than one configurable face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FaceVariant {
    /// Line hands on a 12-hour dial.
    #[default]
    Classic,
    /// Line hands on a 24-hour dial.
    DayDial,
    /// Bitmap hands on a 12-hour dial with the seconds on a sub-dial.
    Bitmap,
}

impl FaceVariant {
    pub const ALL: [FaceVariant; 3] = [FaceVariant::Classic, FaceVariant::DayDial, FaceVariant::Bitmap];

    #[inline]
    pub fn dial(self) -> HourDial {
        match self {
            FaceVariant::Classic | FaceVariant::Bitmap => HourDial::Twelve,
            FaceVariant::DayDial => HourDial::TwentyFour,
        }
    }

    #[inline]
    pub fn hand_style(self) -> HandStyle {
        match self {
            FaceVariant::Classic | FaceVariant::DayDial => HandStyle::Lines,
            FaceVariant::Bitmap => HandStyle::Bitmaps,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceVariant::Classic => "classic",
            FaceVariant::DayDial => "day-dial",
            FaceVariant::Bitmap => "bitmap",
        }
    }
}

impl fmt::Display for FaceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
