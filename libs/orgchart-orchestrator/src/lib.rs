//! # OrgChart Request Orchestrator
//!
//! Turns one asynchronous storage operation into exactly one [`Outcome`]:
//!
//! - **Success**: the call completed with a value
//! - **Empty**: the call completed without one (not found, no-op, rejected)
//! - **Failure**: every attempt errored or timed out
//!
//! Each attempt runs under the deadline of its [`CallPolicy`]. Errors and
//! timeouts are retried sequentially up to `max_retries` extra attempts;
//! empty results are terminal and never retried.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_domain::{DepartmentId, DepartmentRepository, DepartmentService, EmployeeRepository};
//! use orgchart_orchestrator::{Orchestrator, Outcome};
//!
//! async fn example<D, E>(orchestrator: &Orchestrator, service: &DepartmentService<D, E>)
//! where
//!     D: DepartmentRepository,
//!     E: EmployeeRepository,
//! {
//!     let id = DepartmentId::new(1);
//!     match orchestrator.get("getDepartment", || service.get_department(id)).await {
//!         Outcome::Success(department) => println!("found {}", department.name()),
//!         Outcome::Empty => println!("no department {}", id),
//!         Outcome::Failure(err) => println!("failed: {}", err),
//!     }
//! }
//! ```

mod error;
mod executor;
mod outcome;
mod policy;

pub use error::{OrchestrationError, Result};
pub use executor::{run_with_retry, Orchestrator};
pub use outcome::Outcome;
pub use policy::{CallPolicy, OperationKind, PolicyTable};
