//! Memory Store Implementation
//!
//! Departments and employees live in ordered maps behind one async `RwLock`,
//! so every operation sees a consistent snapshot of both tables.
//!
//! The store behaves like the relational schema it stands in for:
//! identifiers start at 1 and are never reused, and an employee's department
//! reference must point at an existing department. That includes deletion:
//! a department that still has employees cannot be removed.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::{stream, Stream, StreamExt};
use orgchart_domain::{
    Department, DepartmentId, DepartmentRepository, Employee, EmployeeId, EmployeeRepository,
    RepositoryError,
};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

#[derive(Debug, Default)]
struct Tables {
    departments: BTreeMap<DepartmentId, String>,
    employees: BTreeMap<EmployeeId, EmployeeRow>,
    last_department_id: i64,
    last_employee_id: i64,
}

#[derive(Debug, Clone)]
struct EmployeeRow {
    name: String,
    department_id: Option<DepartmentId>,
}

impl Tables {
    fn check_department(&self, department_id: Option<DepartmentId>) -> Result<(), RepositoryError> {
        match department_id {
            Some(id) if !self.departments.contains_key(&id) => Err(
                RepositoryError::constraint_violation(format!("department {} does not exist", id)),
            ),
            _ => Ok(()),
        }
    }

    fn employee(id: EmployeeId, row: &EmployeeRow) -> Employee {
        Employee::from_parts(id, row.name.clone(), row.department_id)
    }
}

/// Shared in-memory implementation of both repository ports
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        Self::default()
    }
}

impl DepartmentRepository for MemoryStore {
    #[instrument(skip(self), level = "debug")]
    fn find_all(&self) -> impl Stream<Item = Result<Department, RepositoryError>> + Send {
        let tables = self.tables.clone();

        stream::once(async move {
            let tables = tables.read().await;
            tables
                .departments
                .iter()
                .map(|(id, name)| Ok(Department::from_parts(*id, name.clone())))
                .collect::<Vec<_>>()
        })
        .flat_map(stream::iter)
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            Ok(tables
                .departments
                .get(&id)
                .map(|name| Department::from_parts(id, name.clone())))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn save(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DepartmentId>, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.to_string();

        async move {
            let mut tables = tables.write().await;
            tables.last_department_id += 1;
            let id = DepartmentId::new(tables.last_department_id);
            tables.departments.insert(id, name);
            debug!(department_id = %id, "Stored department");
            Ok(Some(id))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn update(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.to_string();

        async move {
            let mut tables = tables.write().await;
            Ok(match tables.departments.get_mut(&id) {
                Some(existing) => {
                    *existing = name;
                    true
                }
                None => false,
            })
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let mut tables = tables.write().await;
            let referenced = tables
                .employees
                .values()
                .any(|row| row.department_id == Some(id));
            if referenced {
                return Err(RepositoryError::constraint_violation(format!(
                    "department {} is still referenced by employees",
                    id
                )));
            }
            Ok(tables.departments.remove(&id).is_some())
        }
    }
}

impl EmployeeRepository for MemoryStore {
    #[instrument(skip(self), level = "debug")]
    fn find_all(&self) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        let tables = self.tables.clone();

        stream::once(async move {
            let tables = tables.read().await;
            tables
                .employees
                .iter()
                .map(|(id, row)| Ok(Tables::employee(*id, row)))
                .collect::<Vec<_>>()
        })
        .flat_map(stream::iter)
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            let row = tables.employees.get(&id);
            Ok(row.map(|row| Tables::employee(id, row)))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        let tables = self.tables.clone();

        stream::once(async move {
            let tables = tables.read().await;
            tables
                .employees
                .iter()
                .filter(|(_, row)| row.department_id == Some(department_id))
                .map(|(id, row)| Ok(Tables::employee(*id, row)))
                .collect::<Vec<_>>()
        })
        .flat_map(stream::iter)
    }

    #[instrument(skip(self), level = "debug")]
    fn save(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<Option<EmployeeId>, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.to_string();

        async move {
            let mut tables = tables.write().await;
            tables.check_department(department_id)?;
            tables.last_employee_id += 1;
            let id = EmployeeId::new(tables.last_employee_id);
            tables.employees.insert(
                id,
                EmployeeRow {
                    name,
                    department_id,
                },
            );
            debug!(employee_id = %id, "Stored employee");
            Ok(Some(id))
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn update(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.to_string();

        async move {
            let mut tables = tables.write().await;
            if !tables.employees.contains_key(&id) {
                return Ok(false);
            }
            tables.check_department(department_id)?;
            tables.employees.insert(
                id,
                EmployeeRow {
                    name,
                    department_id,
                },
            );
            Ok(true)
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let mut tables = tables.write().await;
            Ok(tables.employees.remove(&id).is_some())
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn unassign_employees(
        &self,
        department_id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let mut tables = tables.write().await;
            let mut unassigned = 0usize;
            for row in tables.employees.values_mut() {
                if row.department_id == Some(department_id) {
                    row.department_id = None;
                    unassigned += 1;
                }
            }
            debug!(department_id = %department_id, unassigned, "Unassigned employees");
            Ok(unassigned > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::TryStreamExt;

    async fn department(store: &MemoryStore, name: &str) -> DepartmentId {
        DepartmentRepository::save(store, name)
            .await
            .unwrap()
            .unwrap()
    }

    async fn employee(store: &MemoryStore, name: &str, dept: Option<DepartmentId>) -> EmployeeId {
        EmployeeRepository::save(store, name, dept)
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();

        assert_eq!(department(&store, "A").await, DepartmentId::new(1));
        assert_eq!(department(&store, "B").await, DepartmentId::new(2));
        assert_eq!(employee(&store, "E", None).await, EmployeeId::new(1));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = department(&store, "A").await;
        assert!(DepartmentRepository::delete(&store, first).await.unwrap());

        assert_eq!(department(&store, "B").await, DepartmentId::new(2));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered() {
        let store = MemoryStore::new();
        department(&store, "Zeta").await;
        department(&store, "Alpha").await;

        let names: Vec<String> = DepartmentRepository::find_all(&store)
            .map_ok(|d| d.name().to_string())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        let id = department(&store, "Shared").await;

        let found = DepartmentRepository::find_by_id(&other, id).await.unwrap();
        assert_eq!(found.unwrap().name(), "Shared");
    }

    #[tokio::test]
    async fn test_employee_requires_existing_department() {
        let store = MemoryStore::new();

        let result = EmployeeRepository::save(&store, "Orphan", Some(DepartmentId::new(7))).await;

        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
        let all: Vec<Employee> = EmployeeRepository::find_all(&store)
            .try_collect()
            .await
            .unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_employee_is_false_even_with_bad_department() {
        let store = MemoryStore::new();

        let updated = EmployeeRepository::update(
            &store,
            EmployeeId::new(3),
            "Nobody",
            Some(DepartmentId::new(9)),
        )
        .await
        .unwrap();

        assert!(!updated);
    }

    #[tokio::test]
    async fn test_referenced_department_cannot_be_deleted() {
        let store = MemoryStore::new();
        let dept = department(&store, "Busy").await;
        employee(&store, "Worker", Some(dept)).await;

        let result = DepartmentRepository::delete(&store, dept).await;

        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_unassign_then_delete() {
        let store = MemoryStore::new();
        let dept = department(&store, "Closing").await;
        let other = department(&store, "Staying").await;
        let a = employee(&store, "A", Some(dept)).await;
        let b = employee(&store, "B", Some(other)).await;

        assert!(store.unassign_employees(dept).await.unwrap());
        assert!(!store.unassign_employees(dept).await.unwrap());
        assert!(DepartmentRepository::delete(&store, dept).await.unwrap());

        let a = EmployeeRepository::find_by_id(&store, a).await.unwrap();
        let b = EmployeeRepository::find_by_id(&store, b).await.unwrap();
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.department_id(), None);
        assert_eq!(b.department_id(), Some(other));
    }

    #[tokio::test]
    async fn test_find_by_department() {
        let store = MemoryStore::new();
        let dept = department(&store, "Team").await;
        employee(&store, "In", Some(dept)).await;
        employee(&store, "Out", None).await;

        let members: Vec<Employee> = store.find_by_department(dept).try_collect().await.unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name(), "In");
    }
}
