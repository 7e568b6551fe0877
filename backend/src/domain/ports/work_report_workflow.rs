//! Driving port for the work report workflow.

use async_trait::async_trait;

use crate::domain::{Error, ReportId, ReportStatus, WorkReport, WorkReportDraft};

/// Request to decide on a work report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReportStatusRequest {
    /// Target report.
    pub report_id: ReportId,
    /// New status.
    pub status: ReportStatus,
    /// Manager feedback stored with the status.
    pub manager_comment: String,
    /// Revision the caller last read, when pinned.
    pub expected_revision: Option<u32>,
}

/// Work report use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkReportWorkflow: Send + Sync {
    /// Store a pending report.
    async fn submit_work_report(&self, draft: WorkReportDraft) -> Result<WorkReport, Error>;

    /// Reports, newest submission first, optionally for one submitter.
    async fn list_work_reports(
        &self,
        employee_email: Option<String>,
    ) -> Result<Vec<WorkReport>, Error>;

    /// Set status and comment together.
    async fn update_report_status(
        &self,
        request: UpdateReportStatusRequest,
    ) -> Result<WorkReport, Error>;
}
