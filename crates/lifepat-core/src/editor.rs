//! Editing session tying the grid store to its undo history.

use std::path::Path;

use lifepat_codec::{PatternExport, decode, encode};
use lifepat_import::{GrayMatrix, ImageImport, import_pixels};
use lifepat_model::{AliveSet, Cell, EditorConfig, GridDims};
use tracing::{debug, info, warn};

use crate::command::EditCommand;
use crate::error::Result;
use crate::history::History;
use crate::store::GridStore;
use crate::transform::Axis;

/// An in-progress paint stroke.
#[derive(Debug, Clone, Copy)]
struct Stroke {
    /// State written to every cell the stroke enters.
    paint: bool,
    last: Cell,
}

/// A pattern editing session.
///
/// Every mutating call snapshots the pre-edit state first, so each call is
/// one undo step. A paint stroke (`begin_stroke`, any number of
/// `extend_stroke`, `end_stroke`) also counts as a single step. Operations
/// that fail leave both grid and history as they were.
#[derive(Debug, Clone, Default)]
pub struct PatternEditor {
    store: GridStore,
    history: History,
    stroke: Option<Stroke>,
}

impl PatternEditor {
    pub fn new(dims: GridDims, history_capacity: usize) -> Self {
        Self {
            store: GridStore::new(dims),
            history: History::new(history_capacity),
            stroke: None,
        }
    }

    /// Builds an empty session sized and bounded by `config`.
    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        Ok(Self::new(config.dims()?, config.history_capacity))
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dims(&self) -> GridDims {
        self.store.dims()
    }

    pub fn alive(&self) -> &AliveSet {
        self.store.alive()
    }

    /// Snapshots the current state, then applies `command`.
    ///
    /// Ends any paint stroke in progress.
    pub fn execute(&mut self, command: EditCommand) {
        self.stroke = None;
        let name = command.name();
        let before = self.store.population();
        self.history.snapshot(self.store.alive());
        self.store.apply(command);
        debug!(
            command = name,
            before,
            after = self.store.population(),
            undo_depth = self.history.undo_depth(),
            "applied edit"
        );
    }

    pub fn toggle(&mut self, row: i32, col: i32) {
        self.execute(EditCommand::Toggle { row, col });
    }

    pub fn set(&mut self, row: i32, col: i32, alive: bool) {
        self.execute(EditCommand::Set { row, col, alive });
    }

    pub fn clear(&mut self) {
        self.execute(EditCommand::Clear);
    }

    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.execute(EditCommand::Shift { dx, dy });
    }

    pub fn rotate90(&mut self) {
        self.execute(EditCommand::Rotate90);
    }

    pub fn flip(&mut self, axis: Axis) {
        self.execute(EditCommand::Flip(axis));
    }

    pub fn center(&mut self) {
        self.execute(EditCommand::Center);
    }

    /// Resizes and clears the grid. History is discarded because old
    /// snapshots may not fit the new bounds.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<()> {
        self.stroke = None;
        if let Err(err) = self.store.resize(rows, cols) {
            warn!(rows, cols, %err, "resize rejected");
            return Err(err.into());
        }
        self.history.clear();
        Ok(())
    }

    /// Restores the previous state. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        self.stroke = None;
        match self.history.undo(self.store.alive()) {
            Some(previous) => {
                self.store.replace(previous);
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone state. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.stroke = None;
        match self.history.redo(self.store.alive()) {
            Some(next) => {
                self.store.replace(next);
                true
            }
            None => false,
        }
    }

    /// Starts a paint stroke: toggles the pressed cell and remembers the
    /// resulting state as the paint value for the rest of the stroke.
    pub fn begin_stroke(&mut self, row: i32, col: i32) {
        self.toggle(row, col);
        let paint = self.store.get(row, col);
        self.stroke = Some(Stroke {
            paint,
            last: Cell::new(row, col),
        });
    }

    /// Paints a cell entered during a stroke. Re-entering the cell the
    /// stroke is already on does nothing, as do calls outside a stroke.
    pub fn extend_stroke(&mut self, row: i32, col: i32) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        let cell = Cell::new(row, col);
        if cell == stroke.last {
            return;
        }
        stroke.last = cell;
        self.store.set(row, col, stroke.paint);
    }

    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Replaces the grid with the decoded text pattern.
    ///
    /// Returns the number of alive cells committed. Empty text is an error
    /// and changes nothing.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        let cells = decode(text, self.dims())?;
        let count = cells.len();
        self.execute(EditCommand::Replace(cells));
        info!(alive = count, "imported text pattern");
        Ok(count)
    }

    /// Replaces the grid with a thresholded, centred rendering of `image`.
    pub fn import_image(&mut self, image: &GrayMatrix, threshold: u8) -> Result<ImageImport> {
        let import = import_pixels(image, threshold, self.dims()).inspect_err(|err| {
            warn!(%err, "image import failed");
        })?;
        self.execute(EditCommand::Replace(import.cells.clone()));
        info!(
            alive = import.cells.len(),
            polarity = ?import.polarity,
            "imported image"
        );
        Ok(import)
    }

    /// Reads an image file and imports it. See [`Self::import_image`].
    pub fn import_image_file(&mut self, path: &Path, threshold: u8) -> Result<ImageImport> {
        let image = GrayMatrix::from_path(path).inspect_err(|err| {
            warn!(path = %path.display(), %err, "could not read image");
        })?;
        self.import_image(&image, threshold)
    }

    pub fn export(&self) -> PatternExport {
        encode(self.store.alive())
    }

    /// Export wrapped in the named-record form. An empty grid still yields
    /// the bare sentinel.
    pub fn export_text(&self, name: &str) -> String {
        self.export().wrapped(name)
    }
}
