//! Driving port for the attendance summary.

use async_trait::async_trait;

use crate::domain::{AttendanceSheet, AttendanceSummary, Error};

/// Current-month sheet and its counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceOverview {
    /// Sheet, empty when nothing was recorded.
    pub attendance: AttendanceSheet,
    /// Present/absent counts.
    pub summary: AttendanceSummary,
}

/// Attendance use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceQuery: Send + Sync {
    /// Summarise the current month for the employee registered under `email`.
    async fn attendance_summary(&self, email: &str) -> Result<AttendanceOverview, Error>;
}
