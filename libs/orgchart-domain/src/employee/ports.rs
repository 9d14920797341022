//! Port for employee storage

use std::future::Future;

use futures_util::Stream;

use crate::{
    employee::Employee,
    error::RepositoryError,
    ids::{DepartmentId, EmployeeId},
};

/// Data access boundary for employees
///
/// Same contract as `DepartmentRepository`, plus the two department-scoped
/// operations the cascade rule relies on.
pub trait EmployeeRepository: Send + Sync {
    /// Stream every employee, ordered by identifier
    fn find_all(&self) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send;

    /// Find an employee by identifier
    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send;

    /// Stream the employees assigned to a department, ordered by identifier
    fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send;

    /// Insert an employee and return its assigned identifier
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ConstraintViolation` if `department_id`
    /// references a department that does not exist
    fn save(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<Option<EmployeeId>, RepositoryError>> + Send;

    /// Replace an employee's name and department
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if the identifier is unknown
    fn update(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;

    /// Delete an employee
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RepositoryError>> + Send;

    /// Clear the department reference of every employee in a department
    ///
    /// # Returns
    ///
    /// `true` if at least one employee was unassigned
    fn unassign_employees(
        &self,
        department_id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;
}
