//! Employee domain module

mod entity;
mod ports;
mod service;

pub use entity::Employee;
pub use ports::EmployeeRepository;
pub use service::EmployeeService;
