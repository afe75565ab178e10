use crate::coords::{Vec2, Viewport};
use crate::engine::EngineState;
use crate::error::FaceError;
use crate::raster::BackgroundCache;
use crate::scene::{DrawList, ZIndex};
use crate::time::ClockSample;

use super::geometry::{self, Geometry, HandLengths};
use super::style::{self, PaintSet};
use super::{FaceResources, FaceVariant, HandRasters, HandStyle};

/// Turns clock samples into draw lists for one face variant.
///
/// The only state kept between frames is the background rescaled to the
/// last viewport size and the reusable draw list buffer.
#[derive(Debug)]
pub struct FaceRenderer {
    variant: FaceVariant,
    background: BackgroundCache,
    hands: Option<HandRasters>,
    list: DrawList,
}

impl FaceRenderer {
    /// Validates and prepares the resources `variant` needs.
    ///
    /// Missing rasters are fatal: the face could never draw a valid frame.
    pub fn new(variant: FaceVariant, resources: FaceResources) -> Result<Self, FaceError> {
        let background = resources.background.ok_or_else(|| FaceError::missing("background"))?;

        let hands = match variant.hand_style() {
            HandStyle::Lines => None,
            HandStyle::Bitmaps => Some(HandRasters::prepare(
                resources.minute_hand.as_ref(),
                resources.hour_hand.as_ref(),
            )?),
        };

        log::debug!(
            "face `{variant}` ready: background {}x{}, bitmap hands: {}",
            background.width(),
            background.height(),
            hands.is_some()
        );

        Ok(Self { variant, background: BackgroundCache::new(background), hands, list: DrawList::new() })
    }

    #[inline]
    pub fn variant(&self) -> FaceVariant {
        self.variant
    }

    /// Number of background rescales so far.
    #[inline]
    pub fn background_rescales(&self) -> u64 {
        self.background.rescale_count()
    }

    /// Hand lengths for `viewport`, per variant.
    pub fn hand_lengths(&self, viewport: Viewport) -> HandLengths {
        let cx = viewport.center().x;
        match &self.hands {
            None => HandLengths {
                second: (cx - style::SECOND_INSET).max(0.0),
                minute: (cx - style::MINUTE_INSET).max(0.0),
                hour: (cx - style::HOUR_INSET).max(0.0),
            },
            Some(hands) => HandLengths {
                second: (cx - style::SUB_DIAL_SECOND_INSET).max(0.0),
                minute: hands.minute.width() as f32 - 2.0 * style::MINUTE_PIVOT_INSET,
                hour: hands.hour.width() as f32 - 2.0 * style::HOUR_PIVOT_INSET,
            },
        }
    }

    /// Geometry of the face at `sample`.
    pub fn geometry(&self, viewport: Viewport, sample: &ClockSample) -> Geometry {
        let second_pivot = match self.variant.hand_style() {
            HandStyle::Lines => Vec2::zero(),
            HandStyle::Bitmaps => style::SUB_DIAL_OFFSET,
        };
        Geometry::compute(viewport, sample, self.variant.dial(), second_pivot, self.hand_lengths(viewport))
    }

    /// Records one frame.
    ///
    /// Paint order: background, date text, second hand (interactive only),
    /// minute hand, hour hand.
    pub fn render(
        &mut self,
        viewport: Viewport,
        sample: &ClockSample,
        state: &EngineState,
        paints: &PaintSet,
    ) -> &DrawList {
        self.list.clear();

        if !viewport.is_valid() {
            log::warn!("skipping frame for invalid viewport {viewport:?}");
            return &self.list;
        }

        let (width, height) = viewport.pixel_size();
        let background = self.background.get(width, height);
        self.list.push_bitmap(ZIndex::BACKGROUND, background, Vec2::zero());

        let g = self.geometry(viewport, sample);
        log::trace!(
            "geometry s={:.3} m={:.3} h={:.3} at {:?}",
            g.second_angle,
            g.minute_angle,
            g.hour_angle,
            g.center
        );

        self.push_date(g.center, sample, paints);

        if !state.ambient_mode {
            self.list.push_line(ZIndex::SECOND_HAND, g.second_pivot, g.second_tip, paints.second);
        }

        match &self.hands {
            None => {
                self.list.push_line(ZIndex::MINUTE_HAND, g.center, g.minute_tip, paints.minute);
                self.list.push_line(ZIndex::HOUR_HAND, g.center, g.hour_tip, paints.hour);
            }
            Some(hands) => {
                let (deg, bounds) = geometry::place_rotated_hand(
                    g.center,
                    g.minute_angle,
                    hands.minute.size(),
                    style::MINUTE_PIVOT_INSET,
                );
                self.list.push_rotated_bitmap(ZIndex::MINUTE_HAND, hands.minute.clone(), deg, bounds);

                let (deg, bounds) = geometry::place_rotated_hand(
                    g.center,
                    g.hour_angle,
                    hands.hour.size(),
                    style::HOUR_PIVOT_INSET,
                );
                self.list.push_rotated_bitmap(ZIndex::HOUR_HAND, hands.hour.clone(), deg, bounds);
            }
        }

        &self.list
    }

    fn push_date(&mut self, center: Vec2, sample: &ClockSample, paints: &PaintSet) {
        self.list.push_text(ZIndex::DATE, sample.day_label(), center + style::DAY_OFFSET, paints.day);
        self.list.push_text(
            ZIndex::DATE,
            sample.weekday_label(),
            center + style::WEEKDAY_OFFSET,
            paints.weekday,
        );
        self.list.push_text(
            ZIndex::DATE,
            sample.month_label(),
            center + style::MONTH_OFFSET,
            paints.month,
        );
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use crate::raster::Raster;
    use crate::scene::DrawCmd;

    use super::*;

    fn raster(w: u32, h: u32) -> Raster {
        Raster::from_image("test", RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255]))).unwrap()
    }

    fn resources() -> FaceResources {
        FaceResources::new().background(raster(32, 32)).minute_hand(raster(200, 10)).hour_hand(raster(120, 12))
    }

    #[test]
    fn missing_background_is_fatal() {
        let err = FaceRenderer::new(FaceVariant::Classic, FaceResources::new()).unwrap_err();
        assert!(matches!(err, FaceError::MissingResource { name: "background" }));
    }

    #[test]
    fn bitmap_face_needs_hand_rasters() {
        let res = FaceResources::new().background(raster(4, 4)).minute_hand(raster(10, 2));
        let err = FaceRenderer::new(FaceVariant::Bitmap, res).unwrap_err();
        assert!(matches!(err, FaceError::MissingResource { name: "hour_hand" }));
    }

    #[test]
    fn line_faces_ignore_hand_rasters() {
        let res = FaceResources::new().background(raster(4, 4));
        assert!(FaceRenderer::new(FaceVariant::DayDial, res).is_ok());
    }

    #[test]
    fn hand_rasters_are_prescaled() {
        let face = FaceRenderer::new(FaceVariant::Bitmap, resources()).unwrap();
        let hands = face.hands.as_ref().unwrap();
        assert_eq!(hands.minute.dimensions(), style::MINUTE_HAND_SIZE);
        assert_eq!(hands.hour.dimensions(), style::HOUR_HAND_SIZE);
    }

    #[test]
    fn invalid_viewport_draws_nothing() {
        let mut face = FaceRenderer::new(FaceVariant::Classic, resources()).unwrap();
        let paints = PaintSet::derive(&EngineState::default());
        let list = face.render(Viewport::new(0.0, 0.0), &ClockSample::at(1, 2, 3), &EngineState::default(), &paints);
        assert!(list.is_empty());
        assert_eq!(face.background_rescales(), 0);
    }

    #[test]
    fn background_fills_viewport() {
        let mut face = FaceRenderer::new(FaceVariant::Classic, resources()).unwrap();
        let paints = PaintSet::derive(&EngineState::default());
        let list = face.render(Viewport::from_pixels(320, 300), &ClockSample::at(1, 2, 3), &EngineState::default(), &paints);
        match list.layer(ZIndex::BACKGROUND).next() {
            Some(DrawCmd::Bitmap(bg)) => {
                assert_eq!(bg.raster.dimensions(), (320, 300));
                assert_eq!(bg.origin, Vec2::zero());
            }
            other => panic!("expected background bitmap, got {other:?}"),
        }
    }
}
