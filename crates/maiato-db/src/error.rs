//! Database error types for maiato-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input rejected before any statement was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A lookup by id matched no row.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the operation was rejected before reaching the database.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<maiato_core::errors::CoreError> for DatabaseError {
    fn from(error: maiato_core::errors::CoreError) -> Self {
        use maiato_core::errors::CoreError;
        match error {
            CoreError::Validation(message) => Self::Validation(message),
        }
    }
}
