//! Department gateway
//!
//! Forwards department operations to storage. Deletion is the one composed
//! operation: employees are unassigned before the department row goes away.

use futures_util::Stream;

use crate::{
    department::{Department, DepartmentRepository},
    employee::EmployeeRepository,
    error::RepositoryError,
    gateway::GatewayConfig,
    ids::DepartmentId,
};

/// Entity gateway for departments
///
/// Generic over both repositories because deleting a department touches the
/// employees that reference it.
pub struct DepartmentService<D, E> {
    departments: D,
    employees: E,
    config: GatewayConfig,
}

impl<D, E> DepartmentService<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    /// Create a new DepartmentService with the given repositories and configuration
    pub fn new(departments: D, employees: E, config: GatewayConfig) -> Self {
        Self {
            departments,
            employees,
            config,
        }
    }

    /// Create a new DepartmentService with default configuration
    pub fn with_repositories(departments: D, employees: E) -> Self {
        Self::new(departments, employees, GatewayConfig::default())
    }

    /// Stream every department
    pub fn list_departments(
        &self,
    ) -> impl Stream<Item = Result<Department, RepositoryError>> + Send + '_ {
        self.departments.find_all()
    }

    /// Find a department by identifier
    pub async fn get_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, RepositoryError> {
        self.departments.find_by_id(id).await
    }

    /// Create a department
    ///
    /// # Returns
    ///
    /// The assigned identifier, or `None` if the name was rejected
    pub async fn create_department(
        &self,
        name: &str,
    ) -> Result<Option<DepartmentId>, RepositoryError> {
        match self.config.normalize_name(name) {
            Some(name) => self.departments.save(name).await,
            None => Ok(None),
        }
    }

    /// Rename a department
    ///
    /// # Returns
    ///
    /// `false` if the department does not exist or the name was rejected
    pub async fn update_department(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> Result<bool, RepositoryError> {
        match self.config.normalize_name(name) {
            Some(name) => self.departments.update(id, name).await,
            None => Ok(false),
        }
    }

    /// Delete a department after unassigning its employees
    ///
    /// The department delete is only dispatched once the unassignment has
    /// completed. If unassignment fails, the department is left untouched and
    /// the error is returned.
    pub async fn delete_department(&self, id: DepartmentId) -> Result<bool, RepositoryError> {
        // `false` only means nobody was assigned
        self.employees.unassign_employees(id).await?;
        self.departments.delete(id).await
    }
}
