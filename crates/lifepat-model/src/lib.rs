//! Core data types for the life pattern editor.
//!
//! - [`Cell`] and [`AliveSet`]: the sparse grid representation
//! - [`Rect`]: derived bounding box of an alive-set
//! - [`GridDims`]: validated grid size
//! - [`EditorConfig`]: user-facing settings
//! - [`PatternError`]: sizing and decoding failures

pub mod cell;
pub mod config;
pub mod dims;
pub mod error;

pub use cell::{AliveSet, Cell, Rect, bounding_box};
pub use config::{DEFAULT_HISTORY_CAPACITY, DEFAULT_PATTERN_NAME, DEFAULT_THRESHOLD, EditorConfig};
pub use dims::GridDims;
pub use error::{PatternError, Result};

/// Builds an alive-set from `(row, col)` pairs.
pub fn alive_set<I>(cells: I) -> AliveSet
where
    I: IntoIterator<Item = (i32, i32)>,
{
    cells.into_iter().map(Cell::from).collect()
}
