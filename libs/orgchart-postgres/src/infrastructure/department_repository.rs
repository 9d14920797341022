//! `DepartmentRepository` on PostgreSQL

use std::future::Future;

use futures_util::{Stream, StreamExt};
use orgchart_domain::{Department, DepartmentId, DepartmentRepository, RepositoryError};
use tracing::{debug, instrument};

use super::{error_mapping::map_sqlx_error, store::PostgresStore};

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department::from_parts(DepartmentId::new(row.id), row.name)
    }
}

impl DepartmentRepository for PostgresStore {
    #[instrument(skip(self), level = "debug")]
    fn find_all(&self) -> impl Stream<Item = Result<Department, RepositoryError>> + Send {
        sqlx::query_as::<_, DepartmentRow>("SELECT id, name FROM departments ORDER BY id")
            .fetch(&self.pool)
            .map(|row| row.map(Department::from).map_err(map_sqlx_error))
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RepositoryError>> + Send {
        async move {
            sqlx::query_as::<_, DepartmentRow>("SELECT id, name FROM departments WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map(|row| row.map(Department::from))
                .map_err(map_sqlx_error)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn save(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DepartmentId>, RepositoryError>> + Send {
        async move {
            let id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO departments (name) VALUES ($1) RETURNING id",
            )
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            debug!(department_id = ?id, "Inserted department");
            Ok(id.map(DepartmentId::new))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn update(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        async move {
            sqlx::query("UPDATE departments SET name = $1 WHERE id = $2")
                .bind(name)
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map(|done| done.rows_affected() > 0)
                .map_err(map_sqlx_error)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        async move {
            sqlx::query("DELETE FROM departments WHERE id = $1")
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map(|done| done.rows_affected() > 0)
                .map_err(map_sqlx_error)
        }
    }
}
