//! PostgreSQL-backed `AttendanceRepository`.
//!
//! Sheets are written by an external process; this adapter only reads them.
//! Daily records are stored as a JSONB array of `{date, status}` objects.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AttendanceRepository, EntityStoreError};
use crate::domain::{AttendanceRecord, AttendanceSheet, EmployeeId, MonthKey};
use crate::query_optional;

use super::models::AttendanceSheetRow;
use super::pool::DbPool;
use super::schema::attendance_sheets;

/// Diesel-backed implementation of [`AttendanceRepository`].
#[derive(Clone)]
pub struct DieselAttendanceRepository {
    pool: DbPool,
}

impl DieselAttendanceRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_sheet(row: AttendanceSheetRow) -> Result<AttendanceSheet, String> {
    let records: Vec<AttendanceRecord> = serde_json::from_value(row.records)
        .map_err(|err| format!("malformed attendance records: {err}"))?;
    Ok(AttendanceSheet {
        employee_id: EmployeeId::from_uuid(row.employee_id),
        month: MonthKey::try_from(row.month).map_err(|err| err.to_string())?,
        records,
    })
}

#[async_trait]
impl AttendanceRepository for DieselAttendanceRepository {
    async fn find_sheet(
        &self,
        employee_id: &EmployeeId,
        month: &MonthKey,
    ) -> Result<Option<AttendanceSheet>, EntityStoreError> {
        query_optional!(
            self,
            attendance_sheets::table,
            attendance_sheets::employee_id
                .eq(employee_id.as_uuid())
                .and(attendance_sheets::month.eq(month.as_str())),
            AttendanceSheetRow,
            row_to_sheet
        )
    }
}
