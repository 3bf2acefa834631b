//! Grid dimensions.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{PatternError, Result};

/// Validated grid size. Both dimensions are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDims", into = "RawDims")]
pub struct GridDims {
    rows: i32,
    cols: i32,
}

impl GridDims {
    /// Creates dimensions, rejecting zero or negative values.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(PatternError::invalid_dimension(rows, cols));
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(&self) -> i32 {
        self.rows
    }

    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `cell` lies in `[0, rows) × [0, cols)`.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self { rows: 30, cols: 30 }
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Serialize, Deserialize)]
struct RawDims {
    rows: i32,
    cols: i32,
}

impl TryFrom<RawDims> for GridDims {
    type Error = PatternError;

    fn try_from(raw: RawDims) -> Result<Self> {
        Self::new(raw.rows, raw.cols)
    }
}

impl From<GridDims> for RawDims {
    fn from(dims: GridDims) -> Self {
        Self {
            rows: dims.rows,
            cols: dims.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(GridDims::new(0, 5).is_err());
        assert!(GridDims::new(5, -1).is_err());
        assert!(GridDims::new(1, 1).is_ok());
    }

    #[test]
    fn contains_is_half_open() {
        let dims = GridDims::new(3, 4).unwrap();
        assert!(dims.contains(Cell::new(0, 0)));
        assert!(dims.contains(Cell::new(2, 3)));
        assert!(!dims.contains(Cell::new(3, 0)));
        assert!(!dims.contains(Cell::new(0, 4)));
        assert!(!dims.contains(Cell::new(-1, 0)));
        assert_eq!(dims.area(), 12);
    }
}
