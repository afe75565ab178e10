use std::fmt;
use std::path::PathBuf;

/// Failure to bring up a watch face.
///
/// Every variant is fatal for the instance: without its rasters no valid
/// frame can be drawn, so construction aborts instead of rendering a blank
/// dial. Per-frame work is infallible.
#[derive(Debug)]
pub enum FaceError {
    /// A resource the selected variant requires was not supplied.
    MissingResource { name: &'static str },
    /// The resource file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The resource bytes are not a decodable image.
    Decode { name: String, source: image::ImageError },
    /// The resource decoded to a zero-sized image.
    EmptyRaster { name: String },
}

impl FaceError {
    pub(crate) fn missing(name: &'static str) -> Self {
        Self::MissingResource { name }
    }
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingResource { name } => write!(f, "missing face resource `{name}`"),
            Self::Io { path, .. } => write!(f, "failed to read face resource {}", path.display()),
            Self::Decode { name, .. } => write!(f, "failed to decode face resource `{name}`"),
            Self::EmptyRaster { name } => write!(f, "face resource `{name}` has no pixels"),
        }
    }
}

impl std::error::Error for FaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::MissingResource { .. } | Self::EmptyRaster { .. } => None,
        }
    }
}
