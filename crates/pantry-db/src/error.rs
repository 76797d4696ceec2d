//! Database error types for pantry-db.

use pantry_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or a row could not be decoded.
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
    /// Convert into a [`CoreError`], naming the entity a missing row stands for.
    pub fn into_core(self, entity_type: &str, id: &str) -> CoreError {
        match self {
            Self::NoResult => CoreError::not_found(entity_type, id),
            other => CoreError::Storage(other.into()),
        }
    }
}

impl From<DatabaseError> for CoreError {
    fn from(e: DatabaseError) -> Self {
        Self::Storage(e.into())
    }
}
