//! Error types for builder operations.

use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur in builder operations.
///
/// Element-level edits on unknown IDs are deliberately not errors; they are
/// silent no-ops at the editor API. Errors are reserved for the file
/// boundary, where a malformed design must never corrupt live state.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Design serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred while reading or writing a design file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsed design file failed structural validation.
    #[error("Invalid design: {0}")]
    InvalidDesign(String),
}
