//! Error types for table resolution and rendering.

use thiserror::Error;

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Error types for table resolution and rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Table cannot be resolved into a rectangular grid
    #[error("Malformed table: {detail}")]
    MalformedTable { detail: String },

    /// Caller-supplied override headers do not match the grid width
    #[error("Header count mismatch: grid has {expected} columns, got {actual} override headers")]
    HeaderMismatch { expected: usize, actual: usize },

    /// Requested table index exceeds the number of tables in the document
    #[error("Table index {index} out of range: document contains {count} tables")]
    IndexOutOfRange { index: usize, count: usize },
}

impl TableError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        TableError::MalformedTable {
            detail: detail.into(),
        }
    }
}
