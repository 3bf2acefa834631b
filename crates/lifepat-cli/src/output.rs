//! Rendering of the final pattern for stdout.

use lifepat_codec::PatternExport;
use lifepat_core::PatternEditor;
use lifepat_model::{Cell, Rect};
use serde::Serialize;

/// Machine-readable description of the edited pattern.
#[derive(Debug, Serialize)]
pub struct PatternReport<'a> {
    pub name: &'a str,
    pub rows: i32,
    pub cols: i32,
    pub population: usize,
    pub bounding_box: Option<Rect>,
    pub cells: Vec<Cell>,
    /// Cropped text block; `None` for an empty grid.
    pub pattern: Option<&'a str>,
}

impl<'a> PatternReport<'a> {
    pub fn new(editor: &PatternEditor, export: &'a PatternExport, name: &'a str) -> Self {
        let dims = editor.dims();
        Self {
            name,
            rows: dims.rows(),
            cols: dims.cols(),
            population: editor.store().population(),
            bounding_box: editor.store().bounding_box(),
            cells: editor.alive().iter().copied().collect(),
            pattern: export.block(),
        }
    }
}

/// Text output: the bare block when `raw`, the named wrapper otherwise.
/// Both forms print the sentinel for an empty grid.
pub fn render_text(export: &PatternExport, name: &str, raw: bool) -> String {
    if raw {
        export.to_string()
    } else {
        export.wrapped(name)
    }
}

/// Pretty-printed JSON report.
pub fn render_json(editor: &PatternEditor, name: &str) -> serde_json::Result<String> {
    let export = editor.export();
    serde_json::to_string_pretty(&PatternReport::new(editor, &export, name))
}
