//! Editing engine for life patterns.
//!
//! [`PatternEditor`] owns a [`GridStore`] and a bounded [`History`] and
//! exposes every edit as an undoable [`EditCommand`]. Geometric transforms
//! live in [`transform`] as pure functions over alive-sets.

mod command;
mod editor;
mod error;
mod history;
mod store;
pub mod transform;

pub use command::EditCommand;
pub use editor::PatternEditor;
pub use error::{EditError, Result};
pub use history::History;
pub use store::GridStore;
pub use transform::Axis;
