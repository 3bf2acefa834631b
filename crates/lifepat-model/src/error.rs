use thiserror::Error;

/// Errors raised by grid sizing and pattern decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Grid dimensions must both be strictly positive.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: i32, cols: i32 },

    /// Decoded text contained no lines after trimming.
    #[error("pattern text is empty")]
    EmptyPattern,
}

impl PatternError {
    /// Create an InvalidDimension error.
    pub fn invalid_dimension(rows: i32, cols: i32) -> Self {
        Self::InvalidDimension { rows, cols }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
