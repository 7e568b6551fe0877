//! Leave requests.
//!
//! Date order is deliberately not checked here: a request whose end date
//! precedes its start date is still filed as pending.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::revision::INITIAL_REVISION;
use crate::domain::{EmployeeId, LeaveId, LeaveStatus};

/// Fields an employee supplies when applying for leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDraft {
    /// Applicant email.
    pub employee_email: String,
    /// First day off.
    pub start_date: NaiveDate,
    /// Last day off.
    pub end_date: NaiveDate,
    /// Free-text reason.
    pub reason: String,
}

/// A request for time off awaiting or carrying a manager decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Identifier.
    pub id: LeaveId,
    /// Applicant, when the email resolved to a registered employee.
    pub employee_id: Option<EmployeeId>,
    /// Applicant email as submitted.
    #[serde(rename = "email")]
    pub employee_email: String,
    /// First day off.
    pub start_date: NaiveDate,
    /// Last day off.
    pub end_date: NaiveDate,
    /// Free-text reason.
    pub reason: String,
    /// Decision state.
    pub status: LeaveStatus,
    /// Filing time.
    pub created_at: DateTime<Utc>,
    /// Last transition time.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub revision: u32,
}

impl LeaveRequest {
    /// File a pending request.
    #[must_use]
    pub fn file(draft: LeaveDraft, employee_id: Option<EmployeeId>, now: DateTime<Utc>) -> Self {
        let LeaveDraft {
            employee_email,
            start_date,
            end_date,
            reason,
        } = draft;
        Self {
            id: LeaveId::random(),
            employee_id,
            employee_email,
            start_date,
            end_date,
            reason,
            status: LeaveStatus::Pending,
            created_at: now,
            updated_at: now,
            revision: INITIAL_REVISION,
        }
    }

    /// Copy with a new decision and the next revision.
    #[must_use]
    pub fn with_status(&self, status: LeaveStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at: now,
            revision: self.revision + 1,
            ..self.clone()
        }
    }
}
