//! Port for team membership storage.

use async_trait::async_trait;

use crate::domain::{ManagerId, TeamMembership};

use super::EntityStoreError;

/// Storage for manager/employee membership pairs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a membership.
    ///
    /// Fails with [`EntityStoreError::DuplicateKey`] when the
    /// `(manager_id, employee_id)` pair already exists.
    async fn insert(&self, membership: &TeamMembership) -> Result<(), EntityStoreError>;

    /// Memberships claimed by one manager, oldest first.
    async fn list_for_manager(
        &self,
        manager_id: &ManagerId,
    ) -> Result<Vec<TeamMembership>, EntityStoreError>;
}
