//! Alive-set to text encoding.

use std::fmt;

use lifepat_model::{AliveSet, Cell, bounding_box};

/// Text shown in place of a pattern when nothing is alive.
pub const EMPTY_SENTINEL: &str = "No cells drawn.";

/// Glyph written for alive cells.
pub const ALIVE: char = 'O';

/// Glyph written for dead cells.
pub const DEAD: char = '.';

/// Result of encoding an alive-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternExport {
    /// No alive cells.
    Empty,
    /// Trimmed block of `O`/`.` rows joined by `\n`.
    Block(String),
}

impl PatternExport {
    /// The raw trimmed block, if any cells are alive.
    pub fn block(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Block(block) => Some(block),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Wraps the block in a named pattern entry:
    ///
    /// ```text
    /// { name: "Glider", pattern: `
    /// .O.
    /// ..O
    /// OOO` }
    /// ```
    ///
    /// An empty export yields [`EMPTY_SENTINEL`].
    pub fn wrapped(&self, name: &str) -> String {
        match self {
            Self::Empty => EMPTY_SENTINEL.to_string(),
            Self::Block(block) => format!("{{ name: {name:?}, pattern: `\n{block}` }}"),
        }
    }
}

impl fmt::Display for PatternExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_SENTINEL),
            Self::Block(block) => f.write_str(block),
        }
    }
}

/// Encodes the bounding box of `cells` as rows of `O` and `.`.
pub fn encode(cells: &AliveSet) -> PatternExport {
    let Some(rect) = bounding_box(cells) else {
        return PatternExport::Empty;
    };
    let lines: Vec<String> = (rect.min_row..=rect.max_row)
        .map(|row| {
            (rect.min_col..=rect.max_col)
                .map(|col| {
                    if cells.contains(&Cell::new(row, col)) {
                        ALIVE
                    } else {
                        DEAD
                    }
                })
                .collect()
        })
        .collect();
    PatternExport::Block(lines.join("\n"))
}
