//! Attendance Aggregator.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::directory::IdentityDirectory;
use crate::domain::ports::{
    AttendanceOverview, AttendanceQuery, AttendanceRepository, EmployeeRepository,
};
use crate::domain::store_errors::map_store_error;
use crate::domain::{AttendanceSheet, AttendanceSummary, Error, MonthKey};

/// Summarises the current month's attendance for one employee.
pub struct AttendanceService<A, E> {
    attendance: Arc<A>,
    directory: IdentityDirectory<E>,
    clock: Arc<dyn Clock>,
}

impl<A, E> AttendanceService<A, E> {
    /// Create the service.
    pub fn new(
        attendance: Arc<A>,
        directory: IdentityDirectory<E>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            attendance,
            directory,
            clock,
        }
    }
}

#[async_trait]
impl<A, E> AttendanceQuery for AttendanceService<A, E>
where
    A: AttendanceRepository,
    E: EmployeeRepository,
{
    async fn attendance_summary(&self, email: &str) -> Result<AttendanceOverview, Error> {
        let employee = self.directory.employee_by_email(email).await?;
        let month = MonthKey::containing(self.clock.utc());
        let attendance = self
            .attendance
            .find_sheet(&employee.id, &month)
            .await
            .map_err(map_store_error)?
            .unwrap_or_else(|| AttendanceSheet::empty(employee.id, month));
        let summary = AttendanceSummary::from_records(&attendance.records);
        Ok(AttendanceOverview {
            attendance,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockAttendanceRepository, MockEmployeeRepository};
    use crate::domain::test_fixtures::{employee_named, fixture_clock, jan};
    use crate::domain::{AttendanceRecord, AttendanceStatus, ErrorCode};

    fn make_service(
        attendance: MockAttendanceRepository,
        employees: MockEmployeeRepository,
    ) -> AttendanceService<MockAttendanceRepository, MockEmployeeRepository> {
        AttendanceService::new(
            Arc::new(attendance),
            IdentityDirectory::new(Arc::new(employees)),
            fixture_clock(),
        )
    }

    fn employees_with_ana() -> MockEmployeeRepository {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(employee_named("Ana"))));
        employees
    }

    #[tokio::test]
    async fn summarises_current_month_ignoring_other_statuses() {
        let mut attendance = MockAttendanceRepository::new();
        attendance
            .expect_find_sheet()
            .withf(|_, month| month.as_str() == "2025-03")
            .times(1)
            .return_once(|employee_id, month| {
                let mut records = Vec::new();
                for (status, count) in [("present", 18), ("absent", 2), ("leave", 1)] {
                    records.extend((0..count).map(|_| AttendanceRecord {
                        date: jan(2),
                        status: AttendanceStatus::from(status.to_owned()),
                    }));
                }
                Ok(Some(AttendanceSheet {
                    employee_id: *employee_id,
                    month: month.clone(),
                    records,
                }))
            });

        let overview = make_service(attendance, employees_with_ana())
            .attendance_summary("ana@corp.test")
            .await
            .expect("summary");
        assert_eq!(overview.summary.present, 18);
        assert_eq!(overview.summary.absent, 2);
        assert_eq!(overview.summary.total, 20);
        assert_eq!(overview.attendance.records.len(), 21);
    }

    #[tokio::test]
    async fn missing_sheet_counts_as_empty() {
        let mut attendance = MockAttendanceRepository::new();
        attendance
            .expect_find_sheet()
            .times(1)
            .return_once(|_, _| Ok(None));

        let overview = make_service(attendance, employees_with_ana())
            .attendance_summary("ana@corp.test")
            .await
            .expect("summary");
        assert_eq!(overview.summary, AttendanceSummary::default());
        assert!(overview.attendance.records.is_empty());
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));

        let error = make_service(MockAttendanceRepository::new(), employees)
            .attendance_summary("ghost@corp.test")
            .await
            .expect_err("not found");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
