//! Error types for schema inference and statement assembly.

use thiserror::Error;

/// Main error type for DDL generation operations.
#[derive(Error, Debug)]
pub enum DdlError {
    /// The input table has no rows - nothing to infer a schema from.
    #[error("Cannot infer a schema from an empty table")]
    EmptyTable,

    /// A column name passed to a width override does not exist in the
    /// formatted header list.
    #[error("Unknown column {column:?} - not present in the formatted header list")]
    UnknownColumn { column: String },
}

impl DdlError {
    /// Create an UnknownColumn error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        DdlError::UnknownColumn {
            column: column.into(),
        }
    }
}

/// Result type alias for DDL generation operations.
pub type Result<T> = std::result::Result<T, DdlError>;
