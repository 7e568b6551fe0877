//! Port for task storage.

use async_trait::async_trait;

use crate::domain::{EmployeeId, Task, TaskId};

use super::EntityStoreError;

/// Storage for assigned tasks.
///
/// # Revision Semantics
///
/// - `save(task, None)` inserts a new task.
/// - `save(task, Some(n))` replaces the stored task only while its revision
///   is still `n`; otherwise [`EntityStoreError::RevisionMismatch`] is
///   returned and nothing changes. The caller sets `task.revision` to the new
///   value before saving.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch a task by identifier.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, EntityStoreError>;

    /// Tasks assigned to one employee, earliest deadline first.
    async fn list_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Task>, EntityStoreError>;

    /// Insert or conditionally replace a task.
    async fn save(&self, task: &Task, expected_revision: Option<u32>)
    -> Result<(), EntityStoreError>;
}
