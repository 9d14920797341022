//! DTOs for employee endpoints

use orgchart_domain::Employee;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating an employee
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Identifier of the employee to update (ignored on create)
    #[schema(example = 1)]
    #[serde(default)]
    pub id: Option<i64>,
    /// Employee name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Department to assign the employee to
    #[schema(example = 1)]
    #[serde(default)]
    pub dept_id: Option<i64>,
}

/// A stored employee; `deptId` is null when unassigned
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = 1)]
    pub dept_id: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id().value(),
            name: employee.name().to_string(),
            dept_id: employee.department_id().map(|id| id.value()),
        }
    }
}
