/// Flags driven by host callbacks.
///
/// Mutated only inside [`Engine::handle`](super::Engine::handle); read by the
/// scheduler and the renderer. Reset to all-false when a face is created.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct EngineState {
    pub visible: bool,
    pub ambient_mode: bool,
    /// The display drops color depth in ambient mode.
    pub low_bit_ambient: bool,
    /// A do-not-disturb filter dims the face.
    pub muted: bool,
}

/// Do-not-disturb level reported by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InterruptionFilter {
    All,
    Priority,
    NoInterruptions,
    AlarmsOnly,
    Unknown(i32),
}

impl InterruptionFilter {
    /// Maps the platform's numeric filter levels.
    pub fn from_raw(level: i32) -> Self {
        match level {
            1 => Self::All,
            2 => Self::Priority,
            3 => Self::NoInterruptions,
            4 => Self::AlarmsOnly,
            other => Self::Unknown(other),
        }
    }

    /// Only the "no interruptions" level mutes the face.
    #[inline]
    pub fn mutes(self) -> bool {
        self == Self::NoInterruptions
    }
}
