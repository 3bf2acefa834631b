//! Edit operations accepted by `--op`.

use std::fmt;
use std::str::FromStr;

use lifepat_core::{Axis, PatternEditor};
use thiserror::Error;
use tracing::debug;

/// One edit step from the command line, e.g. `toggle:3,4` or `flip-h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Toggle { row: i32, col: i32 },
    Set { row: i32, col: i32, alive: bool },
    Shift { dx: i32, dy: i32 },
    Rotate,
    FlipH,
    FlipV,
    Center,
    Clear,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpParseError {
    #[error("unknown operation `{0}`")]
    Unknown(String),

    #[error("`{op}` expects {expected} comma-separated values, got `{args}`")]
    Arity {
        op: &'static str,
        expected: usize,
        args: String,
    },

    #[error("`{op}`: `{value}` is not an integer")]
    NotInteger { op: &'static str, value: String },

    #[error("`set`: cell state must be 0 or 1, got `{0}`")]
    State(String),

    #[error("`{0}` takes no arguments")]
    UnexpectedArgs(&'static str),
}

impl Op {
    /// Applies the operation to `editor`.
    pub fn apply(self, editor: &mut PatternEditor) {
        match self {
            Self::Toggle { row, col } => editor.toggle(row, col),
            Self::Set { row, col, alive } => editor.set(row, col, alive),
            Self::Shift { dx, dy } => editor.shift(dx, dy),
            Self::Rotate => editor.rotate90(),
            Self::FlipH => editor.flip(Axis::Horizontal),
            Self::FlipV => editor.flip(Axis::Vertical),
            Self::Center => editor.center(),
            Self::Clear => editor.clear(),
            Self::Undo => {
                if !editor.undo() {
                    debug!("nothing to undo");
                }
            }
            Self::Redo => {
                if !editor.redo() {
                    debug!("nothing to redo");
                }
            }
        }
    }
}

/// Applies `ops` in order.
pub fn apply_all(ops: &[Op], editor: &mut PatternEditor) {
    for op in ops {
        op.apply(editor);
    }
}

fn integers<const N: usize>(op: &'static str, args: &str) -> Result<[i32; N], OpParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(OpParseError::Arity {
            op,
            expected: N,
            args: args.to_string(),
        });
    }
    let mut values = [0; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|_| OpParseError::NotInteger {
            op,
            value: part.to_string(),
        })?;
    }
    Ok(values)
}

impl FromStr for Op {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = match s.split_once(':') {
            Some((name, args)) => (name.trim(), Some(args)),
            None => (s.trim(), None),
        };
        let bare = |op: Self, label: &'static str| match args {
            None => Ok(op),
            Some(_) => Err(OpParseError::UnexpectedArgs(label)),
        };
        match name.to_ascii_lowercase().as_str() {
            "toggle" => {
                let [row, col] = integers::<2>("toggle", args.unwrap_or_default())?;
                Ok(Self::Toggle { row, col })
            }
            "set" => {
                let args = args.unwrap_or_default();
                let arity_error = || OpParseError::Arity {
                    op: "set",
                    expected: 3,
                    args: args.to_string(),
                };
                if args.split(',').count() != 3 {
                    return Err(arity_error());
                }
                let (cell, state) = args.rsplit_once(',').ok_or_else(arity_error)?;
                let [row, col] = integers::<2>("set", cell)?;
                let alive = match state.trim() {
                    "1" => true,
                    "0" => false,
                    other => return Err(OpParseError::State(other.to_string())),
                };
                Ok(Self::Set { row, col, alive })
            }
            "shift" => {
                let [dx, dy] = integers::<2>("shift", args.unwrap_or_default())?;
                Ok(Self::Shift { dx, dy })
            }
            "rotate" => bare(Self::Rotate, "rotate"),
            "flip-h" => bare(Self::FlipH, "flip-h"),
            "flip-v" => bare(Self::FlipV, "flip-v"),
            "center" | "centre" => bare(Self::Center, "center"),
            "clear" => bare(Self::Clear, "clear"),
            "undo" => bare(Self::Undo, "undo"),
            "redo" => bare(Self::Redo, "redo"),
            _ => Err(OpParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle { row, col } => write!(f, "toggle:{row},{col}"),
            Self::Set { row, col, alive } => write!(f, "set:{row},{col},{}", u8::from(*alive)),
            Self::Shift { dx, dy } => write!(f, "shift:{dx},{dy}"),
            Self::Rotate => f.write_str("rotate"),
            Self::FlipH => f.write_str("flip-h"),
            Self::FlipV => f.write_str("flip-v"),
            Self::Center => f.write_str("center"),
            Self::Clear => f.write_str("clear"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}
