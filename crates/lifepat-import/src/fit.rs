//! Aspect-preserving placement of an image on the grid.

use lifepat_model::GridDims;

use crate::error::{ImageImportError, Result};

/// Where and at what size an image lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Resampled width in cells.
    pub target_w: u32,
    /// Resampled height in cells.
    pub target_h: u32,
    /// Column of the left edge.
    pub offset_x: i32,
    /// Row of the top edge.
    pub offset_y: i32,
}

/// Scales a `width × height` image to fill the grid along its constraining
/// side while preserving aspect ratio, then centres it.
///
/// Images relatively wider than the grid fill the grid width; all others fill
/// the grid height. The free side is rounded to the nearest cell.
///
/// # Errors
///
/// Returns [`ImageImportError::EmptyImage`] for a zero-sized image and
/// [`ImageImportError::DegenerateFit`] when the free side rounds to zero.
pub fn fit_to_grid(width: u32, height: u32, dims: GridDims) -> Result<Fit> {
    if width == 0 || height == 0 {
        return Err(ImageImportError::EmptyImage);
    }
    let image_ratio = f64::from(width) / f64::from(height);
    let grid_ratio = f64::from(dims.cols()) / f64::from(dims.rows());

    let (target_w, target_h) = if image_ratio > grid_ratio {
        let h = (f64::from(dims.cols()) / image_ratio).round();
        (dims.cols() as u32, h as u32)
    } else {
        let w = (f64::from(dims.rows()) * image_ratio).round();
        (w as u32, dims.rows() as u32)
    };
    if target_w == 0 || target_h == 0 {
        return Err(ImageImportError::DegenerateFit { target_w, target_h });
    }

    Ok(Fit {
        target_w,
        target_h,
        offset_x: (dims.cols() - target_w as i32).div_euclid(2),
        offset_y: (dims.rows() - target_h as i32).div_euclid(2),
    })
}
