use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::coords::Vec2;
use crate::error::FaceError;

/// Cheap-clone handle to a decoded RGBA image.
///
/// Equality is identity: two handles are equal when they share the same
/// pixel buffer. Comparing draw lists therefore never walks pixels.
#[derive(Clone)]
pub struct Raster {
    pixels: Arc<RgbaImage>,
}

impl Raster {
    /// Wraps an already decoded image. `name` is only used for errors.
    pub fn from_image(name: &str, image: RgbaImage) -> Result<Self, FaceError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(FaceError::EmptyRaster { name: name.to_string() });
        }
        Ok(Self { pixels: Arc::new(image) })
    }

    /// Decodes an encoded image (PNG, JPEG or BMP).
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, FaceError> {
        let image = image::load_from_memory(bytes)
            .map_err(|source| FaceError::Decode { name: name.to_string(), source })?;
        Self::from_image(name, image.to_rgba8())
    }

    /// Reads and decodes an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FaceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| FaceError::Io { path: path.to_path_buf(), source })?;
        Self::decode(&path.display().to_string(), &bytes)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Size as a vector, for geometry.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Resamples to exactly `width` x `height` with bilinear filtering.
    ///
    /// Returns a handle to the same buffer when the size already matches.
    pub fn scaled(&self, width: u32, height: u32) -> Raster {
        if self.dimensions() == (width, height) {
            return self.clone();
        }
        let resized = imageops::resize(self.pixels.as_ref(), width, height, FilterType::Triangle);
        Raster { pixels: Arc::new(resized) }
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Raster({}x{})", self.width(), self.height())
    }
}
