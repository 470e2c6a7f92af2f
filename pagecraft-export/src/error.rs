//! Exporter error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during HTML export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The design has no pages to export.
    #[error("Design has no pages")]
    EmptyDesign,
}
