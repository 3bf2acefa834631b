//! Undoable edit commands.

use lifepat_model::AliveSet;

use crate::transform::Axis;

/// A single mutation of the grid contents.
///
/// Each executed command is preceded by exactly one history snapshot, so one
/// command is one undo step. Imports are decoded ahead of time and arrive
/// here as [`EditCommand::Replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Toggle { row: i32, col: i32 },
    Set { row: i32, col: i32, alive: bool },
    Clear,
    /// Move every cell `dx` columns right and `dy` rows down.
    Shift { dx: i32, dy: i32 },
    Rotate90,
    Flip(Axis),
    Center,
    /// Replace the whole alive-set. Out-of-grid cells are dropped.
    Replace(AliveSet),
}

impl EditCommand {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Set { .. } => "set",
            Self::Clear => "clear",
            Self::Shift { .. } => "shift",
            Self::Rotate90 => "rotate",
            Self::Flip(Axis::Horizontal) => "flip-h",
            Self::Flip(Axis::Vertical) => "flip-v",
            Self::Center => "center",
            Self::Replace(_) => "replace",
        }
    }
}
