//! Editor configuration shared by the engine and its front-ends.

use serde::{Deserialize, Serialize};

use crate::dims::GridDims;
use crate::error::Result;

/// Default number of undo entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Default brightness threshold for image import.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Default name used by the wrapped export.
pub const DEFAULT_PATTERN_NAME: &str = "MyPattern";

/// Editor settings (persisted as TOML by the CLI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid height in cells.
    pub rows: i32,
    /// Grid width in cells.
    pub cols: i32,
    /// Maximum number of undo entries.
    pub history_capacity: usize,
    /// Brightness threshold (0-255) for image import.
    pub threshold: u8,
    /// Name written into the wrapped export.
    pub pattern_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let dims = GridDims::default();
        Self {
            rows: dims.rows(),
            cols: dims.cols(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            threshold: DEFAULT_THRESHOLD,
            pattern_name: DEFAULT_PATTERN_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    /// Validated grid dimensions for this configuration.
    pub fn dims(&self) -> Result<GridDims> {
        GridDims::new(self.rows, self.cols)
    }

    pub fn with_dims(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_pattern_name(mut self, name: impl Into<String>) -> Self {
        self.pattern_name = name.into();
        self
    }
}
