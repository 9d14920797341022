//! Translation of `sqlx` errors into domain errors

use orgchart_domain::RepositoryError;

/// SQLSTATE for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Convert a driver error into a `RepositoryError`
///
/// Connection and pool problems become `Unavailable`, foreign key violations
/// become `ConstraintViolation`, everything else is a `QueryFailed`.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Io(e) => RepositoryError::unavailable(e.to_string()),
        sqlx::Error::Tls(e) => RepositoryError::unavailable(e.to_string()),
        sqlx::Error::PoolTimedOut => RepositoryError::unavailable("connection pool timed out"),
        sqlx::Error::PoolClosed => RepositoryError::unavailable("connection pool closed"),
        sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
            RepositoryError::constraint_violation(db.message().to_string())
        }
        other => RepositoryError::query_failed(other.to_string()),
    }
}
