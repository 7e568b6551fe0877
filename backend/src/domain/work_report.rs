//! Employee work reports.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::revision::INITIAL_REVISION;
use crate::domain::{ReportId, ReportStatus};

/// Validation failures for a work report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkReportValidationError {
    /// `end_date` precedes `start_date`.
    EndBeforeStart,
}

impl fmt::Display for WorkReportValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart => write!(f, "End date cannot be before start date"),
        }
    }
}

impl std::error::Error for WorkReportValidationError {}

/// Validated submission payload.
///
/// ## Invariants
/// - `start_date <= end_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkReportDraft {
    employee_email: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_hours: f64,
    report_name: String,
    description: String,
}

impl WorkReportDraft {
    /// Build a draft, rejecting reversed date ranges.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use hr_backend::domain::WorkReportDraft;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    /// let err = WorkReportDraft::try_new("e@x.com", start, end, 8.0, "Week 2", "")
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "End date cannot be before start date");
    /// ```
    pub fn try_new(
        employee_email: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_hours: f64,
        report_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, WorkReportValidationError> {
        if end_date < start_date {
            return Err(WorkReportValidationError::EndBeforeStart);
        }
        Ok(Self {
            employee_email: employee_email.into(),
            start_date,
            end_date,
            total_hours,
            report_name: report_name.into(),
            description: description.into(),
        })
    }

    /// Submitter email.
    pub fn employee_email(&self) -> &str {
        &self.employee_email
    }
}

/// A submitted report of hours worked over a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkReport {
    /// Identifier.
    pub id: ReportId,
    /// Submitter email.
    pub employee_email: String,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
    /// Hours claimed.
    pub total_hours: f64,
    /// Report title.
    pub report_name: String,
    /// Free-text body.
    pub description: String,
    /// Review state.
    pub status: ReportStatus,
    /// Manager feedback; empty until reviewed.
    pub manager_comment: String,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
    /// Last transition time.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub revision: u32,
}

impl WorkReport {
    /// Record a pending report submitted at `now`.
    #[must_use]
    pub fn submit(draft: WorkReportDraft, now: DateTime<Utc>) -> Self {
        let WorkReportDraft {
            employee_email,
            start_date,
            end_date,
            total_hours,
            report_name,
            description,
        } = draft;
        Self {
            id: ReportId::random(),
            employee_email,
            start_date,
            end_date,
            total_hours,
            report_name,
            description,
            status: ReportStatus::Pending,
            manager_comment: String::new(),
            submitted_at: now,
            updated_at: now,
            revision: INITIAL_REVISION,
        }
    }

    /// Copy carrying the manager's decision and comment.
    #[must_use]
    pub fn reviewed(&self, status: ReportStatus, comment: String, now: DateTime<Utc>) -> Self {
        Self {
            status,
            manager_comment: comment,
            updated_at: now,
            revision: self.revision + 1,
            ..self.clone()
        }
    }
}

/// Order reports newest submission first.
pub fn sort_newest_first(reports: &mut [WorkReport]) {
    reports.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
}
