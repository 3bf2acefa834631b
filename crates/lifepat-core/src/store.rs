//! Bounded sparse grid of alive cells.

use lifepat_model::{AliveSet, Cell, GridDims, Rect, Result, bounding_box};
use tracing::debug;

use crate::command::EditCommand;
use crate::transform;

/// The authoritative grid state: dimensions plus the set of alive cells.
///
/// Every stored cell lies inside the grid. Writes to out-of-grid
/// coordinates are ignored and reads return `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridStore {
    dims: GridDims,
    alive: AliveSet,
}

impl GridStore {
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            alive: AliveSet::new(),
        }
    }

    /// Creates an empty store, validating the dimensions.
    pub fn with_size(rows: i32, cols: i32) -> Result<Self> {
        Ok(Self::new(GridDims::new(rows, cols)?))
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn alive(&self) -> &AliveSet {
        &self.alive
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Changes the grid size and clears every cell.
    ///
    /// On invalid dimensions the store is left untouched.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<()> {
        let dims = GridDims::new(rows, cols)?;
        debug!(from = %self.dims, to = %dims, "resized grid");
        self.dims = dims;
        self.alive.clear();
        Ok(())
    }

    pub fn get(&self, row: i32, col: i32) -> bool {
        self.alive.contains(&Cell::new(row, col))
    }

    /// Marks a cell alive or dead. Out-of-grid writes are ignored.
    pub fn set(&mut self, row: i32, col: i32, alive: bool) {
        let cell = Cell::new(row, col);
        if !self.dims.contains(cell) {
            return;
        }
        if alive {
            self.alive.insert(cell);
        } else {
            self.alive.remove(&cell);
        }
    }

    /// Flips a cell. Out-of-grid toggles are ignored.
    pub fn toggle(&mut self, row: i32, col: i32) {
        let cell = Cell::new(row, col);
        if !self.dims.contains(cell) {
            return;
        }
        if !self.alive.remove(&cell) {
            self.alive.insert(cell);
        }
    }

    pub fn clear(&mut self) {
        self.alive.clear();
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box(&self.alive)
    }

    /// Replaces the alive-set wholesale, dropping cells outside the grid.
    pub fn replace(&mut self, mut cells: AliveSet) {
        let dims = self.dims;
        cells.retain(|cell| dims.contains(*cell));
        self.alive = cells;
    }

    /// Applies a command in place. History is the caller's concern.
    pub fn apply(&mut self, command: EditCommand) {
        match command {
            EditCommand::Toggle { row, col } => self.toggle(row, col),
            EditCommand::Set { row, col, alive } => self.set(row, col, alive),
            EditCommand::Clear => self.clear(),
            EditCommand::Shift { dx, dy } => {
                self.alive = transform::shift(&self.alive, self.dims, dx, dy);
            }
            EditCommand::Rotate90 => {
                self.alive = transform::rotate90_clockwise(&self.alive, self.dims);
            }
            EditCommand::Flip(axis) => {
                self.alive = transform::flip(&self.alive, self.dims, axis);
            }
            EditCommand::Center => {
                self.alive = transform::center(&self.alive, self.dims);
            }
            EditCommand::Replace(cells) => self.replace(cells),
        }
    }
}
