//! Error types for viewport operations
//!
//! Every fallible operation in the crate reports through [`ViewportError`].

use thiserror::Error;

/// Errors that can occur while binding surfaces, zooming or loading settings
#[derive(Error, Debug)]
pub enum ViewportError {
    /// An argument was missing or unusable (unbound surface, non-finite point)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value fell outside its permitted range (zoom factor, tool mode code)
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// IO error while reading or writing settings
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for viewport operations
pub type ViewportResult<T> = Result<T, ViewportError>;

impl ViewportError {
    /// Returns true for `InvalidArgument` errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true for `OutOfRange` errors
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
