use lifepat_import::ImageImportError;
use lifepat_model::PatternError;
use thiserror::Error;

/// Errors surfaced by an editing session.
///
/// A failed operation never changes the grid or the history.
#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("image import failed: {0}")]
    Import(#[from] ImageImportError),
}

pub type Result<T> = std::result::Result<T, EditError>;
