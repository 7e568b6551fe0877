//! Port for work report storage.

use async_trait::async_trait;

use crate::domain::{ReportId, WorkReport};

use super::EntityStoreError;

/// Storage for work reports.
///
/// `save` follows the same revision contract as
/// [`super::TaskRepository::save`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkReportRepository: Send + Sync {
    /// Fetch a report by identifier.
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<WorkReport>, EntityStoreError>;

    /// Reports, optionally restricted to one submitter.
    ///
    /// Ordering is not guaranteed; the service sorts.
    async fn list(
        &self,
        employee_email: Option<String>,
    ) -> Result<Vec<WorkReport>, EntityStoreError>;

    /// Insert or conditionally replace a report.
    async fn save(
        &self,
        report: &WorkReport,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError>;
}
