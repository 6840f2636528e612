//! Error types for csvgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in csvgrid-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {index} out of bounds (rows: {count})")]
    RowOutOfBounds { index: usize, count: usize },

    /// Column index out of bounds
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnOutOfBounds { index: usize, count: usize },

    /// Edit command could not be parsed
    #[error("Invalid edit command: {0}")]
    InvalidCommand(String),
}

impl Error {
    pub(crate) fn row(index: usize, count: usize) -> Self {
        Error::RowOutOfBounds { index, count }
    }

    pub(crate) fn column(index: usize, count: usize) -> Self {
        Error::ColumnOutOfBounds { index, count }
    }
}
