//! Port for department storage
//!
//! Like every port in this crate, methods return `impl Future` / `impl Stream`
//! instead of boxing, so each adapter is monomorphized into its callers.

use std::future::Future;

use futures_util::Stream;

use crate::{department::Department, error::RepositoryError, ids::DepartmentId};

/// Data access boundary for departments
///
/// Implementations must:
/// - Assign identifiers on `save`
/// - Report "nothing affected" as `Ok(false)` rather than an error
/// - Convert infrastructure errors to `RepositoryError`
pub trait DepartmentRepository: Send + Sync {
    /// Stream every department, ordered by identifier
    ///
    /// The stream may yield an error at any point, after which it ends.
    fn find_all(&self) -> impl Stream<Item = Result<Department, RepositoryError>> + Send;

    /// Find a department by identifier
    ///
    /// # Returns
    ///
    /// `None` when no department has this identifier
    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RepositoryError>> + Send;

    /// Insert a department and return its assigned identifier
    ///
    /// # Returns
    ///
    /// `None` when the backend accepted the statement but produced no row
    fn save(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DepartmentId>, RepositoryError>> + Send;

    /// Rename a department
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if the identifier is unknown
    fn update(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;

    /// Delete a department
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted, `false` if the identifier is unknown
    fn delete(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;
}
