//! PostgreSQL-backed `LeaveRepository` with revision-checked decisions.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, LeaveRepository};
use crate::domain::{EmployeeId, LeaveId, LeaveRequest};
use crate::query_and_disambiguate;
use crate::query_optional;
use crate::query_vec;
use crate::save_with_revision;

use super::diesel_helpers::{HasRevision, cast_revision, cast_revision_for_db};
use super::models::{LeaveRow, LeaveStatusUpdate};
use super::pool::DbPool;
use super::schema::leave_requests;

/// Diesel-backed implementation of [`LeaveRepository`].
#[derive(Clone)]
pub struct DieselLeaveRepository {
    pool: DbPool,
}

impl DieselLeaveRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_leave(row: LeaveRow) -> Result<LeaveRequest, String> {
    Ok(LeaveRequest {
        id: LeaveId::from_uuid(row.id),
        employee_id: row.employee_id.map(EmployeeId::from_uuid),
        employee_email: row.employee_email,
        start_date: row.start_date,
        end_date: row.end_date,
        reason: row.reason,
        status: row.status.parse().map_err(|err| format!("{err}"))?,
        created_at: row.created_at,
        updated_at: row.updated_at,
        revision: cast_revision(row.revision),
    })
}

impl HasRevision for LeaveRow {
    fn revision(&self) -> u32 {
        cast_revision(self.revision)
    }
}

async fn handle_leave_update_failure<C>(
    conn: &mut C,
    leave_id: uuid::Uuid,
    expected_revision: u32,
) -> EntityStoreError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    query_and_disambiguate!(
        conn,
        leave_requests::table,
        leave_requests::id.eq(leave_id),
        LeaveRow,
        expected_revision,
        "Leave"
    )
}

#[async_trait]
impl LeaveRepository for DieselLeaveRepository {
    async fn find_by_id(&self, id: &LeaveId) -> Result<Option<LeaveRequest>, EntityStoreError> {
        query_optional!(
            self,
            leave_requests::table,
            leave_requests::id.eq(id.as_uuid()),
            LeaveRow,
            row_to_leave
        )
    }

    async fn list_for_email(&self, email: &str) -> Result<Vec<LeaveRequest>, EntityStoreError> {
        query_vec!(
            self,
            leave_requests::table,
            leave_requests::employee_email.eq(email),
            leave_requests::created_at.asc(),
            LeaveRow,
            row_to_leave
        )
    }

    async fn list_all(&self) -> Result<Vec<LeaveRequest>, EntityStoreError> {
        query_vec!(
            self,
            leave_requests::table,
            leave_requests::id.is_not_null(),
            leave_requests::created_at.desc(),
            LeaveRow,
            row_to_leave
        )
    }

    async fn save(
        &self,
        leave: &LeaveRequest,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let leave_id = *leave.id.as_uuid();
        save_with_revision!(
            self,
            expected_revision,
            insert: {
                table: leave_requests::table,
                new_row: LeaveRow {
                    id: leave_id,
                    employee_id: leave.employee_id.map(|id| *id.as_uuid()),
                    employee_email: leave.employee_email.clone(),
                    start_date: leave.start_date,
                    end_date: leave.end_date,
                    reason: leave.reason.clone(),
                    status: leave.status.as_str().to_owned(),
                    created_at: leave.created_at,
                    updated_at: leave.updated_at,
                    revision: cast_revision_for_db(leave.revision),
                }
            },
            update(expected): {
                table: leave_requests::table,
                filter: leave_requests::id
                    .eq(leave_id)
                    .and(leave_requests::revision.eq(cast_revision_for_db(expected))),
                changeset: LeaveStatusUpdate {
                    status: leave.status.as_str(),
                    updated_at: leave.updated_at,
                    revision: cast_revision_for_db(leave.revision),
                },
                on_zero_rows: |conn, expected| handle_leave_update_failure(conn, leave_id, expected)
            }
        )
    }
}
