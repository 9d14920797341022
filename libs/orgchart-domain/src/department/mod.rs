//! Department domain module
//!
//! A department groups employees. Deleting one cascades to its employees,
//! which lose their assignment but are kept.

mod entity;
mod ports;
mod service;

pub use entity::Department;
pub use ports::DepartmentRepository;
pub use service::DepartmentService;
