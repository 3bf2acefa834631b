//! Text to alive-set decoding.

use lifepat_model::{AliveSet, Cell, GridDims, PatternError, Result};
use tracing::debug;

/// Characters that mark a cell as alive. Anything else is dead.
pub const ALIVE_GLYPHS: [char; 4] = ['O', '#', '*', '0'];

/// Returns true if `ch` denotes an alive cell.
pub fn is_alive_glyph(ch: char) -> bool {
    ALIVE_GLYPHS.contains(&ch)
}

/// Decodes a multi-line pattern blob into an alive-set centred on the grid.
///
/// The block is centred vertically as a whole, but each line is trimmed and
/// centred horizontally on its own, so ragged lines do not stay left-aligned.
/// Cells landing outside the grid are dropped.
///
/// # Errors
///
/// Returns [`PatternError::EmptyPattern`] when the text is blank.
pub fn decode(text: &str, dims: GridDims) -> Result<AliveSet> {
    let content = text.trim();
    if content.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let line_count = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let start_row = (dims.rows() - line_count).div_euclid(2);

    let mut cells = AliveSet::new();
    let mut clipped = 0usize;
    for (row_index, line) in (0i32..).zip(&lines) {
        let line = line.trim();
        let width = i32::try_from(line.chars().count()).unwrap_or(i32::MAX);
        let start_col = (dims.cols() - width).div_euclid(2);
        for (col_index, ch) in (0i32..).zip(line.chars()) {
            if !is_alive_glyph(ch) {
                continue;
            }
            let cell = Cell::new(start_row + row_index, start_col + col_index);
            if dims.contains(cell) {
                cells.insert(cell);
            } else {
                clipped += 1;
            }
        }
    }

    debug!(
        lines = lines.len(),
        alive = cells.len(),
        clipped,
        grid = %dims,
        "decoded pattern text"
    );
    Ok(cells)
}
