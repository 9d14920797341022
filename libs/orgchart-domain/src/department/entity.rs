//! Department entity

use serde::{Deserialize, Serialize};

use crate::ids::DepartmentId;

/// A department of the company
///
/// Departments are created, renamed and removed entirely inside the data
/// access boundary; this type is only a snapshot of a stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Storage-assigned identifier
    id: DepartmentId,

    /// Display name
    name: String,
}

impl Department {
    /// Create a Department snapshot from stored values
    pub fn from_parts(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Get the department identifier
    pub fn id(&self) -> DepartmentId {
        self.id
    }

    /// Get the department name
    pub fn name(&self) -> &str {
        &self.name
    }
}
