//! # OrgChart Domain Layer
//!
//! This crate contains the business model for OrgChart: departments, the
//! employees assigned to them, and the gateways that compose storage calls
//! into logical operations. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Department, Employee)
//! - **Ports**: Trait definitions for the data access boundary
//!   (DepartmentRepository, EmployeeRepository)
//! - **Services**: Entity gateways (DepartmentService, EmployeeService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, HTTP, runtimes).
//! Storage is expressed as traits returning futures and streams that adapter
//! crates implement.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_domain::{DepartmentRepository, DepartmentService, EmployeeRepository};
//!
//! async fn example<D, E>(service: DepartmentService<D, E>)
//! where
//!     D: DepartmentRepository,
//!     E: EmployeeRepository,
//! {
//!     if let Ok(Some(id)) = service.create_department("Engineering").await {
//!         println!("Created department: {}", id);
//!     }
//! }
//! ```

pub mod department;
pub mod employee;
pub mod error;
pub mod gateway;
pub mod ids;

// Re-export commonly used types
pub use department::{Department, DepartmentRepository, DepartmentService};
pub use employee::{Employee, EmployeeRepository, EmployeeService};
pub use error::{RepositoryError, Result};
pub use gateway::GatewayConfig;
pub use ids::{DepartmentId, EmployeeId};

#[cfg(test)]
pub(crate) mod test_support;
