//! Geometric transforms over alive-sets.
//!
//! Every transform is pure: it builds a new alive-set from the old one and
//! drops any cell that lands outside the grid. Nothing wraps around.

use lifepat_model::{AliveSet, Cell, GridDims, bounding_box};

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Mirror left-right: `(r, c) -> (r, cols - 1 - c)`.
    Horizontal,
    /// Mirror top-bottom: `(r, c) -> (rows - 1 - r, c)`.
    Vertical,
}

fn map_cells(cells: &AliveSet, dims: GridDims, f: impl Fn(Cell) -> Option<Cell>) -> AliveSet {
    cells
        .iter()
        .filter_map(|&cell| f(cell))
        .filter(|cell| dims.contains(*cell))
        .collect()
}

/// Moves every cell `dx` columns right and `dy` rows down. Cells pushed
/// past the `i32` range are dropped like any other off-grid cell.
pub fn shift(cells: &AliveSet, dims: GridDims, dx: i32, dy: i32) -> AliveSet {
    map_cells(cells, dims, |cell| cell.offset(dy, dx))
}

/// Rotates 90° clockwise about the real-valued grid centre.
///
/// Results are truncated toward zero, not rounded. On even-sized or
/// non-square grids this can bias cells by one position.
pub fn rotate90_clockwise(cells: &AliveSet, dims: GridDims) -> AliveSet {
    let center_r = f64::from(dims.rows()) / 2.0;
    let center_c = f64::from(dims.cols()) / 2.0;
    map_cells(cells, dims, |cell| {
        let tr = f64::from(cell.row) - center_r;
        let tc = f64::from(cell.col) - center_c;
        Some(Cell::new((tc + center_r) as i32, (-tr + center_c) as i32))
    })
}

/// Mirrors the pattern across the grid's middle.
pub fn flip(cells: &AliveSet, dims: GridDims, axis: Axis) -> AliveSet {
    map_cells(cells, dims, |cell| match axis {
        Axis::Horizontal => Some(Cell::new(cell.row, dims.cols() - 1 - cell.col)),
        Axis::Vertical => Some(Cell::new(dims.rows() - 1 - cell.row, cell.col)),
    })
}

/// Moves the pattern so its bounding box is centred on the grid.
///
/// The target top-left is `((rows - h) div 2, (cols - w) div 2)` with floor
/// division. Empty sets are returned unchanged.
pub fn center(cells: &AliveSet, dims: GridDims) -> AliveSet {
    let Some(rect) = bounding_box(cells) else {
        return cells.clone();
    };
    let target_r = (dims.rows() - rect.height()).div_euclid(2);
    let target_c = (dims.cols() - rect.width()).div_euclid(2);
    shift(cells, dims, target_c - rect.min_col, target_r - rect.min_row)
}
