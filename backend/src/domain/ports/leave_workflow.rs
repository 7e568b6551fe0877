//! Driving port for the leave request workflow.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{ContactCard, Error, LeaveDraft, LeaveId, LeaveRequest, LeaveStatus};

/// Request to decide on a leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLeaveStatusRequest {
    /// Target request.
    pub leave_id: LeaveId,
    /// New status.
    pub status: LeaveStatus,
    /// Revision the caller last read, when pinned.
    pub expected_revision: Option<u32>,
}

/// Leave request with applicant directory data.
///
/// Name and email are `null` when the applicant does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedLeave {
    /// Underlying request.
    #[serde(flatten)]
    pub leave: LeaveRequest,
    /// Applicant name.
    pub employee_name: Option<String>,
    /// Applicant email from the directory.
    pub employee_email: Option<String>,
}

impl EnrichedLeave {
    /// Combine a request with an optional contact card.
    #[must_use]
    pub fn new(leave: LeaveRequest, contact: Option<ContactCard>) -> Self {
        let (employee_name, employee_email) = contact
            .map(|card| (Some(card.name), Some(card.email)))
            .unwrap_or_default();
        Self {
            leave,
            employee_name,
            employee_email,
        }
    }
}

/// Leave use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveWorkflow: Send + Sync {
    /// File a pending request and return the applicant's full history.
    async fn apply_leave(&self, draft: LeaveDraft) -> Result<Vec<LeaveRequest>, Error>;

    /// Requests filed under `email`, in filing order.
    async fn leave_history(&self, email: &str) -> Result<Vec<LeaveRequest>, Error>;

    /// Every request, newest first, with applicant directory data.
    async fn list_leave_requests(&self) -> Result<Vec<EnrichedLeave>, Error>;

    /// Record a manager decision.
    async fn update_leave_status(
        &self,
        request: UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequest, Error>;
}
