//! Connection pool and schema bootstrap

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use orgchart_domain::RepositoryError;

use super::error_mapping::map_sqlx_error;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS departments (
        id   BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id      BIGSERIAL PRIMARY KEY,
        name    TEXT NOT NULL,
        dept_id BIGINT REFERENCES departments (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS employees_dept_id_idx ON employees (dept_id)",
];

/// PostgreSQL implementation of both repository ports
///
/// `employees.dept_id` references `departments.id` without any `ON DELETE`
/// action, so a department can only be deleted once its employees have been
/// unassigned.
#[derive(Clone)]
pub struct PostgresStore {
    pub(super) pool: PgPool,
}

impl PostgresStore {
    /// Wrap an existing pool
    fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against the given database URL
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if no connection can be made
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        info!(max_connections, "Connecting to PostgreSQL");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool))
    }

    /// Create the tables if they do not exist yet
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        }
        info!("Database schema ready");
        Ok(())
    }
}
