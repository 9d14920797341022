//! PostgreSQL storage adapter for OrgChart
//!
//! Implements the repository ports on a `sqlx` connection pool. Lists are
//! streamed row by row from the server instead of being buffered.

pub mod infrastructure;

pub use infrastructure::PostgresStore;
