//! Employee gateway

use futures_util::Stream;

use crate::{
    employee::{Employee, EmployeeRepository},
    error::RepositoryError,
    gateway::GatewayConfig,
    ids::{DepartmentId, EmployeeId},
};

/// Entity gateway for employees
///
/// A pass-through to the repository apart from name validation.
pub struct EmployeeService<E> {
    employees: E,
    config: GatewayConfig,
}

impl<E> EmployeeService<E>
where
    E: EmployeeRepository,
{
    /// Create a new EmployeeService with the given repository and configuration
    pub fn new(employees: E, config: GatewayConfig) -> Self {
        Self { employees, config }
    }

    /// Create a new EmployeeService with default configuration
    pub fn with_repository(employees: E) -> Self {
        Self::new(employees, GatewayConfig::default())
    }

    /// Stream every employee
    pub fn list_employees(
        &self,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send + '_ {
        self.employees.find_all()
    }

    /// Stream the employees of one department
    pub fn list_employees_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send + '_ {
        self.employees.find_by_department(department_id)
    }

    /// Find an employee by identifier
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        self.employees.find_by_id(id).await
    }

    /// Create an employee, optionally assigned to a department
    ///
    /// # Returns
    ///
    /// The assigned identifier, or `None` if the name was rejected
    pub async fn create_employee(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> Result<Option<EmployeeId>, RepositoryError> {
        match self.config.normalize_name(name) {
            Some(name) => self.employees.save(name, department_id).await,
            None => Ok(None),
        }
    }

    /// Replace an employee's name and department
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> Result<bool, RepositoryError> {
        match self.config.normalize_name(name) {
            Some(name) => self.employees.update(id, name, department_id).await,
            None => Ok(false),
        }
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        self.employees.delete(id).await
    }
}
