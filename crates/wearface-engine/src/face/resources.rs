use crate::error::FaceError;
use crate::raster::Raster;

use super::style;

/// Raw rasters handed to a face at construction.
///
/// Every face needs a background; the bitmap variant also needs both hand
/// rasters. What is required is checked by [`FaceRenderer::new`](super::FaceRenderer::new).
#[derive(Debug, Clone, Default)]
pub struct FaceResources {
    pub background: Option<Raster>,
    pub minute_hand: Option<Raster>,
    pub hour_hand: Option<Raster>,
}

impl FaceResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, raster: Raster) -> Self {
        self.background = Some(raster);
        self
    }

    pub fn minute_hand(mut self, raster: Raster) -> Self {
        self.minute_hand = Some(raster);
        self
    }

    pub fn hour_hand(mut self, raster: Raster) -> Self {
        self.hour_hand = Some(raster);
        self
    }
}

/// Hand rasters scaled once, at load time, to their fixed on-screen size.
#[derive(Debug, Clone)]
pub struct HandRasters {
    pub minute: Raster,
    pub hour: Raster,
}

impl HandRasters {
    pub fn prepare(minute: Option<&Raster>, hour: Option<&Raster>) -> Result<Self, FaceError> {
        let minute = minute.ok_or_else(|| FaceError::missing("minute_hand"))?;
        let hour = hour.ok_or_else(|| FaceError::missing("hour_hand"))?;
        let (mw, mh) = style::MINUTE_HAND_SIZE;
        let (hw, hh) = style::HOUR_HAND_SIZE;
        Ok(Self { minute: minute.scaled(mw, mh), hour: hour.scaled(hw, hh) })
    }
}
