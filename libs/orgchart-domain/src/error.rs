//! Domain errors for data access operations
//!
//! Adapters convert their infrastructure errors (SQL driver, pool, lock) into
//! these variants so that upper layers never see backend-specific types.

use thiserror::Error;

/// Errors surfaced by the data access boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backend could not be reached (connection refused, pool exhausted)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed to execute a statement
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A write would break a referential constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// An unexpected internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Create an unavailable error with a message
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a query failure with a message
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::QueryFailed(msg.into())
    }

    /// Create a constraint violation with a message
    pub fn constraint_violation(msg: impl Into<String>) -> Self {
        Self::ConstraintViolation(msg.into())
    }

    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias for data access operations
pub type Result<T> = std::result::Result<T, RepositoryError>;
