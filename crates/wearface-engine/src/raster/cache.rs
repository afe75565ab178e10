use super::Raster;

/// Background raster rescaled to the current surface size.
///
/// The rescale is keyed by `(width, height)`: it is recomputed only when the
/// surface size changes, never per frame. The source raster is kept so a
/// later size change can resample from full quality again.
#[derive(Debug)]
pub struct BackgroundCache {
    source: Raster,
    scaled: Option<Raster>,
    rescales: u64,
}

impl BackgroundCache {
    pub fn new(source: Raster) -> Self {
        Self { source, scaled: None, rescales: 0 }
    }

    /// Returns the background at exactly `width` x `height`.
    pub fn get(&mut self, width: u32, height: u32) -> Raster {
        match &self.scaled {
            Some(cached) if cached.dimensions() == (width, height) => cached.clone(),
            _ => {
                log::debug!(
                    "rescaling background {}x{} -> {width}x{height}",
                    self.source.width(),
                    self.source.height()
                );
                let scaled = self.source.scaled(width, height);
                self.rescales += 1;
                self.scaled = Some(scaled.clone());
                scaled
            }
        }
    }

    /// Number of times the background has been resampled.
    #[inline]
    pub fn rescale_count(&self) -> u64 {
        self.rescales
    }
}
