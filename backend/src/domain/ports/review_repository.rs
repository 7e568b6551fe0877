//! Port for performance review storage.

use async_trait::async_trait;

use crate::domain::{EmployeeId, Review, ReviewId};

use super::EntityStoreError;

/// Storage for reviews.
///
/// `save` follows the same revision contract as
/// [`super::TaskRepository::save`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetch a review by identifier.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, EntityStoreError>;

    /// Reviews, optionally restricted to one employee.
    async fn list(
        &self,
        employee_id: Option<EmployeeId>,
    ) -> Result<Vec<Review>, EntityStoreError>;

    /// Insert or conditionally replace a review.
    async fn save(
        &self,
        review: &Review,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError>;
}
