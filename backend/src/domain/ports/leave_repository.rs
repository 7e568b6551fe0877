//! Port for leave request storage.

use async_trait::async_trait;

use crate::domain::{LeaveId, LeaveRequest};

use super::EntityStoreError;

/// Storage for leave requests.
///
/// `save` follows the same revision contract as
/// [`super::TaskRepository::save`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Fetch a request by identifier.
    async fn find_by_id(&self, id: &LeaveId) -> Result<Option<LeaveRequest>, EntityStoreError>;

    /// Requests filed under an email, in filing order.
    async fn list_for_email(&self, email: &str) -> Result<Vec<LeaveRequest>, EntityStoreError>;

    /// Every request, newest first.
    async fn list_all(&self) -> Result<Vec<LeaveRequest>, EntityStoreError>;

    /// Insert or conditionally replace a request.
    async fn save(
        &self,
        leave: &LeaveRequest,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError>;
}
