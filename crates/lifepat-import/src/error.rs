//! Error types for image import.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning an image into a pattern.
#[derive(Debug, Error)]
pub enum ImageImportError {
    /// The image bytes could not be decoded or resampled.
    #[error("image decoding failed: {0}")]
    Decode(#[from] image::ImageError),

    /// The image file could not be read.
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image has zero width or height.
    #[error("image has no pixels")]
    EmptyImage,

    /// Pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// Fitting the image to the grid rounds one side down to zero cells.
    #[error("image fits the grid as {target_w}x{target_h} cells; both sides must be at least 1")]
    DegenerateFit { target_w: u32, target_h: u32 },
}

/// Result type alias for image import operations.
pub type Result<T> = std::result::Result<T, ImageImportError>;

impl ImageImportError {
    /// Create an Io error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
