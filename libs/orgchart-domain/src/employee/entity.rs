//! Employee entity

use serde::{Deserialize, Serialize};

use crate::ids::{DepartmentId, EmployeeId};

/// An employee, optionally assigned to a department
///
/// The department reference is not checked here. Whether it points at an
/// existing department is decided by the storage adapter at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage-assigned identifier
    id: EmployeeId,

    /// Display name
    name: String,

    /// Department this employee belongs to, if any
    department_id: Option<DepartmentId>,
}

impl Employee {
    /// Create an Employee snapshot from stored values
    pub fn from_parts(
        id: EmployeeId,
        name: impl Into<String>,
        department_id: Option<DepartmentId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department_id,
        }
    }

    /// Get the employee identifier
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Get the employee name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the assigned department (if any)
    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    /// Check if this employee belongs to a department
    pub fn is_assigned(&self) -> bool {
        self.department_id.is_some()
    }
}
