//! Storage-assigned identifiers
//!
//! Keys are allocated by the store on insert and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a Department
///
/// Wraps the raw integer key so a department id cannot be passed where an
/// employee id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i64);

impl DepartmentId {
    /// Wrap a raw storage key
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw storage key
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned identifier of an Employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw storage key
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw storage key
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
