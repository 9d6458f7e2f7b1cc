//! Database error types for hvac-db.

use thiserror::Error;

/// Errors from catalog database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The catalog read could not be completed. No partial result is
    /// returned alongside this error.
    #[error("Failed to fetch equipment: {0}")]
    FetchFailed(String),

    /// A column value could not be decoded into its field type.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema setup failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
