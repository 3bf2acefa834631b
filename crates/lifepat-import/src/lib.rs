//! Raster image import for life patterns.
//!
//! Converts a grayscale pixel matrix into grid cells:
//!
//! 1. Fit the image to the grid, preserving its aspect ratio ([`fit_to_grid`])
//! 2. Resample with nearest-neighbor sampling so edges stay hard
//! 3. Centre the result on the grid
//! 4. Detect polarity from the mean brightness ([`Polarity`])
//! 5. Threshold every pixel into an alive or dead cell
//!
//! Decoding image files is delegated to the `image` crate through
//! [`GrayMatrix::from_path`] and [`GrayMatrix::from_bytes`].

mod error;
mod fit;
mod importer;
mod matrix;

pub use error::{ImageImportError, Result};
pub use fit::{Fit, fit_to_grid};
pub use importer::{ImageImport, LIGHT_BACKGROUND_MEAN, Polarity, import_pixels};
pub use matrix::GrayMatrix;
