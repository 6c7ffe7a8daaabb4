//! Error type for deck generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while assembling a deck package.
#[derive(Debug, Error)]
pub enum DeckError {
    /// ZIP archive error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error while writing into the in-memory package
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
