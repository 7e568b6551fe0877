//! Read-only port for attendance sheets.

use async_trait::async_trait;

use crate::domain::{AttendanceSheet, EmployeeId, MonthKey};

use super::EntityStoreError;

/// Lookup of monthly attendance sheets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Sheet for one employee and month, if recorded.
    async fn find_sheet(
        &self,
        employee_id: &EmployeeId,
        month: &MonthKey,
    ) -> Result<Option<AttendanceSheet>, EntityStoreError>;
}
