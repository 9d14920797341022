mod department_repository;
mod employee_repository;
mod error_mapping;
mod store;

pub use error_mapping::map_sqlx_error;
pub use store::PostgresStore;
