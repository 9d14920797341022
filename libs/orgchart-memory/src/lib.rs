//! In-memory storage adapter for OrgChart
//!
//! Implements both repository ports on a single shared map. Used when no
//! database is configured and as the backend of the HTTP tests.

pub mod infrastructure;

pub use infrastructure::MemoryStore;
