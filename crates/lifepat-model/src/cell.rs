//! Cell coordinates, alive-sets and bounding boxes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the grid.
///
/// Coordinates are signed so that off-grid input (drag overshoot, shifted
/// cells) can be represented and then ignored by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns this cell moved by `dy` rows and `dx` columns, or `None` if
    /// either coordinate leaves the `i32` range.
    #[must_use]
    pub fn offset(self, dy: i32, dx: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dy)?,
            col: self.col.checked_add(dx)?,
        })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// The set of alive cells. Absent cells are dead.
pub type AliveSet = BTreeSet<Cell>;

/// Minimal rectangle enclosing an alive-set (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Rect {
    /// Number of rows covered.
    pub const fn height(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    /// Number of columns covered.
    pub const fn width(&self) -> i32 {
        self.max_col - self.min_col + 1
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= self.min_row
            && cell.row <= self.max_row
            && cell.col >= self.min_col
            && cell.col <= self.max_col
    }

    fn include(&mut self, cell: Cell) {
        self.min_row = self.min_row.min(cell.row);
        self.max_row = self.max_row.max(cell.row);
        self.min_col = self.min_col.min(cell.col);
        self.max_col = self.max_col.max(cell.col);
    }
}

/// Computes the bounding box of `cells`, or `None` when the set is empty.
pub fn bounding_box<'a, I>(cells: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut iter = cells.into_iter();
    let first = *iter.next()?;
    let mut rect = Rect {
        min_row: first.row,
        max_row: first.row,
        min_col: first.col,
        max_col: first.col,
    };
    for cell in iter {
        rect.include(*cell);
    }
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_reports_overflow() {
        let cell = Cell::new(2, -3);
        assert_eq!(cell.offset(1, 3), Some(Cell::new(3, 0)));
        assert_eq!(cell.offset(i32::MAX, 0), None);
        assert_eq!(cell.offset(0, i32::MIN), None);
    }

    #[test]
    fn bounding_box_of_empty_set_is_none() {
        let cells = AliveSet::new();
        assert_eq!(bounding_box(&cells), None);
    }

    #[test]
    fn bounding_box_covers_all_cells() {
        let cells: AliveSet = [(1, 1), (1, 2), (2, 1)].into_iter().map(Cell::from).collect();
        let rect = bounding_box(&cells).expect("non-empty");
        assert_eq!(
            rect,
            Rect {
                min_row: 1,
                max_row: 2,
                min_col: 1,
                max_col: 2
            }
        );
        assert_eq!(rect.height(), 2);
        assert_eq!(rect.width(), 2);
        assert!(rect.contains(Cell::new(2, 2)));
        assert!(!rect.contains(Cell::new(3, 2)));
    }

    #[test]
    fn single_cell_box_is_one_by_one() {
        let cells: AliveSet = std::iter::once(Cell::new(4, 7)).collect();
        let rect = bounding_box(&cells).expect("non-empty");
        assert_eq!((rect.height(), rect.width()), (1, 1));
    }
}
