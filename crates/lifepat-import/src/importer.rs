//! Image to alive-set conversion.

use lifepat_model::{AliveSet, Cell, GridDims};
use tracing::debug;

use crate::error::Result;
use crate::fit::{Fit, fit_to_grid};
use crate::matrix::GrayMatrix;

/// Mean intensity above which an image is treated as light-background.
pub const LIGHT_BACKGROUND_MEAN: f64 = 127.0;

/// Which pixels count as the subject of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Light background: pixels darker than the threshold are alive.
    LightBackground,
    /// Dark background: pixels brighter than the threshold are alive.
    DarkBackground,
}

impl Polarity {
    /// Chooses a polarity from the mean intensity of the image.
    pub fn detect(mean: f64) -> Self {
        if mean > LIGHT_BACKGROUND_MEAN {
            Self::LightBackground
        } else {
            Self::DarkBackground
        }
    }

    /// Whether `pixel` is alive under this polarity.
    pub fn is_alive(self, pixel: u8, threshold: u8) -> bool {
        match self {
            Self::LightBackground => pixel < threshold,
            Self::DarkBackground => pixel > threshold,
        }
    }
}

/// Outcome of converting an image into grid cells.
#[derive(Debug, Clone)]
pub struct ImageImport {
    /// Cells to commit to the grid.
    pub cells: AliveSet,
    /// Placement of the resampled image.
    pub fit: Fit,
    /// Polarity chosen from the resampled mean.
    pub polarity: Polarity,
    /// Mean intensity of the resampled image.
    pub mean: f64,
}

/// Converts a grayscale image into a centred alive-set for a grid.
///
/// The image is fitted to the grid with its aspect ratio preserved,
/// nearest-neighbor resampled, and thresholded with a polarity detected from
/// the resampled mean. Nothing is written anywhere; callers commit
/// [`ImageImport::cells`] only when this returns `Ok`.
pub fn import_pixels(image: &GrayMatrix, threshold: u8, dims: GridDims) -> Result<ImageImport> {
    let fit = fit_to_grid(image.width(), image.height(), dims)?;
    let resampled = image.resize_nearest(fit.target_w, fit.target_h)?;
    let mean = resampled.mean();
    let polarity = Polarity::detect(mean);

    let mut cells = AliveSet::new();
    for (y, row) in (0i32..).zip(resampled.pixels().chunks(fit.target_w as usize)) {
        for (x, &pixel) in (0i32..).zip(row) {
            if polarity.is_alive(pixel, threshold) {
                cells.insert(Cell::new(y + fit.offset_y, x + fit.offset_x));
            }
        }
    }

    debug!(
        source_w = image.width(),
        source_h = image.height(),
        target_w = fit.target_w,
        target_h = fit.target_h,
        mean,
        ?polarity,
        threshold,
        alive = cells.len(),
        "converted image to cells"
    );
    Ok(ImageImport {
        cells,
        fit,
        polarity,
        mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_boundary_is_strict() {
        assert_eq!(Polarity::detect(127.0), Polarity::DarkBackground);
        assert_eq!(Polarity::detect(127.5), Polarity::LightBackground);
    }

    #[test]
    fn threshold_comparisons_are_strict() {
        assert!(!Polarity::LightBackground.is_alive(128, 128));
        assert!(Polarity::LightBackground.is_alive(127, 128));
        assert!(!Polarity::DarkBackground.is_alive(128, 128));
        assert!(Polarity::DarkBackground.is_alive(129, 128));
    }
}
