//! DTOs for department endpoints

use orgchart_domain::Department;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating a department
#[derive(Debug, Deserialize, ToSchema)]
pub struct DepartmentRequest {
    /// Identifier of the department to update (ignored on create)
    #[schema(example = 1)]
    #[serde(default)]
    pub id: Option<i64>,
    /// Department name
    #[schema(example = "Engineering")]
    pub name: String,
}

/// A stored department
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct DepartmentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Engineering")]
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id().value(),
            name: department.name().to_string(),
        }
    }
}
