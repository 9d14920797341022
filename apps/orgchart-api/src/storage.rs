//! Storage backend selection
//!
//! The service runs on exactly one backend, chosen at startup. `Backend`
//! implements both repository ports by delegating to the selected adapter.

use std::future::Future;

use futures_util::{future::Either, Stream};
use orgchart_domain::{
    Department, DepartmentId, DepartmentRepository, Employee, EmployeeId, EmployeeRepository,
    RepositoryError,
};
use orgchart_memory::MemoryStore;
use orgchart_postgres::PostgresStore;
use tracing::info;

use crate::config::AppConfig;

/// The storage adapter the service is running on
#[derive(Clone)]
pub enum Backend {
    Memory(MemoryStore),
    Postgres(PostgresStore),
}

impl Backend {
    /// Connect the backend described by the configuration
    ///
    /// Uses PostgreSQL when `DATABASE_URL` is set, creating the schema if
    /// needed; otherwise starts with an empty in-memory store.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match &config.database_url {
            Some(url) => {
                let max_connections = config.db_max_connections;
                let store = PostgresStore::connect(url, max_connections).await?;
                store.ensure_schema().await?;
                info!("Using PostgreSQL backend");
                Ok(Self::Postgres(store))
            }
            None => {
                info!("DATABASE_URL not set, using in-memory backend");
                Ok(Self::Memory(MemoryStore::new()))
            }
        }
    }

    /// Short name of the active backend
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

impl DepartmentRepository for Backend {
    fn find_all(&self) -> impl Stream<Item = Result<Department, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(DepartmentRepository::find_all(store)),
            Self::Postgres(store) => Either::Right(DepartmentRepository::find_all(store)),
        }
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(DepartmentRepository::find_by_id(store, id)),
            Self::Postgres(store) => Either::Right(DepartmentRepository::find_by_id(store, id)),
        }
    }

    fn save(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DepartmentId>, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(DepartmentRepository::save(store, name)),
            Self::Postgres(store) => Either::Right(DepartmentRepository::save(store, name)),
        }
    }

    fn update(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(DepartmentRepository::update(store, id, name)),
            Self::Postgres(store) => Either::Right(DepartmentRepository::update(store, id, name)),
        }
    }

    fn delete(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(DepartmentRepository::delete(store, id)),
            Self::Postgres(store) => Either::Right(DepartmentRepository::delete(store, id)),
        }
    }
}

impl EmployeeRepository for Backend {
    fn find_all(&self) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(EmployeeRepository::find_all(store)),
            Self::Postgres(store) => Either::Right(EmployeeRepository::find_all(store)),
        }
    }

    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(EmployeeRepository::find_by_id(store, id)),
            Self::Postgres(store) => Either::Right(EmployeeRepository::find_by_id(store, id)),
        }
    }

    fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(store.find_by_department(department_id)),
            Self::Postgres(store) => Either::Right(store.find_by_department(department_id)),
        }
    }

    fn save(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<Option<EmployeeId>, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => {
                Either::Left(EmployeeRepository::save(store, name, department_id))
            }
            Self::Postgres(store) => {
                Either::Right(EmployeeRepository::save(store, name, department_id))
            }
        }
    }

    fn update(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => {
                Either::Left(EmployeeRepository::update(store, id, name, department_id))
            }
            Self::Postgres(store) => {
                Either::Right(EmployeeRepository::update(store, id, name, department_id))
            }
        }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(EmployeeRepository::delete(store, id)),
            Self::Postgres(store) => Either::Right(EmployeeRepository::delete(store, id)),
        }
    }

    fn unassign_employees(
        &self,
        department_id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        match self {
            Self::Memory(store) => Either::Left(store.unassign_employees(department_id)),
            Self::Postgres(store) => Either::Right(store.unassign_employees(department_id)),
        }
    }
}
