//! `EmployeeRepository` on PostgreSQL

use std::future::Future;

use futures_util::{Stream, StreamExt};
use orgchart_domain::{DepartmentId, Employee, EmployeeId, EmployeeRepository, RepositoryError};
use tracing::{debug, instrument};

use super::{error_mapping::map_sqlx_error, store::PostgresStore};

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    dept_id: Option<i64>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::from_parts(
            EmployeeId::new(row.id),
            row.name,
            row.dept_id.map(DepartmentId::new),
        )
    }
}

impl EmployeeRepository for PostgresStore {
    #[instrument(skip(self), level = "debug")]
    fn find_all(&self) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        sqlx::query_as::<_, EmployeeRow>("SELECT id, name, dept_id FROM employees ORDER BY id")
            .fetch(&self.pool)
            .map(|row| row.map(Employee::from).map_err(map_sqlx_error))
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send {
        async move {
            sqlx::query_as::<_, EmployeeRow>(
                "SELECT id, name, dept_id FROM employees WHERE id = $1",
            )
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Employee::from))
            .map_err(map_sqlx_error)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, dept_id FROM employees WHERE dept_id = $1 ORDER BY id",
        )
        .bind(department_id.value())
        .fetch(&self.pool)
        .map(|row| row.map(Employee::from).map_err(map_sqlx_error))
    }

    #[instrument(skip(self), level = "debug")]
    fn save(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<Option<EmployeeId>, RepositoryError>> + Send {
        async move {
            let id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO employees (name, dept_id) VALUES ($1, $2) RETURNING id",
            )
            .bind(name)
            .bind(department_id.map(|d| d.value()))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            debug!(employee_id = ?id, "Inserted employee");
            Ok(id.map(EmployeeId::new))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn update(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        async move {
            sqlx::query("UPDATE employees SET name = $1, dept_id = $2 WHERE id = $3")
                .bind(name)
                .bind(department_id.map(|d| d.value()))
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map(|done| done.rows_affected() > 0)
                .map_err(map_sqlx_error)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        async move {
            sqlx::query("DELETE FROM employees WHERE id = $1")
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map(|done| done.rows_affected() > 0)
                .map_err(map_sqlx_error)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn unassign_employees(
        &self,
        department_id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        async move {
            let done = sqlx::query("UPDATE employees SET dept_id = NULL WHERE dept_id = $1")
                .bind(department_id.value())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            debug!(
                department_id = %department_id,
                unassigned = done.rows_affected(),
                "Unassigned employees"
            );
            Ok(done.rows_affected() > 0)
        }
    }
}
