//! PostgreSQL-backed `WorkReportRepository` with revision-checked reviews.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, WorkReportRepository};
use crate::domain::{ReportId, WorkReport};
use crate::query_and_disambiguate;
use crate::query_optional;
use crate::save_with_revision;

use super::diesel_helpers::{
    HasRevision, cast_revision, cast_revision_for_db, collect_rows, map_diesel_error,
    map_pool_error,
};
use super::models::{WorkReportReviewUpdate, WorkReportRow};
use super::pool::DbPool;
use super::schema::work_reports;

/// Diesel-backed implementation of [`WorkReportRepository`].
#[derive(Clone)]
pub struct DieselWorkReportRepository {
    pool: DbPool,
}

impl DieselWorkReportRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_report(row: WorkReportRow) -> Result<WorkReport, String> {
    Ok(WorkReport {
        id: ReportId::from_uuid(row.id),
        employee_email: row.employee_email,
        start_date: row.start_date,
        end_date: row.end_date,
        total_hours: row.total_hours,
        report_name: row.report_name,
        description: row.description,
        status: row.status.parse().map_err(|err| format!("{err}"))?,
        manager_comment: row.manager_comment,
        submitted_at: row.submitted_at,
        updated_at: row.updated_at,
        revision: cast_revision(row.revision),
    })
}

impl HasRevision for WorkReportRow {
    fn revision(&self) -> u32 {
        cast_revision(self.revision)
    }
}

async fn handle_report_update_failure<C>(
    conn: &mut C,
    report_id: uuid::Uuid,
    expected_revision: u32,
) -> EntityStoreError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    query_and_disambiguate!(
        conn,
        work_reports::table,
        work_reports::id.eq(report_id),
        WorkReportRow,
        expected_revision,
        "Report"
    )
}

#[async_trait]
impl WorkReportRepository for DieselWorkReportRepository {
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<WorkReport>, EntityStoreError> {
        query_optional!(
            self,
            work_reports::table,
            work_reports::id.eq(id.as_uuid()),
            WorkReportRow,
            row_to_report
        )
    }

    async fn list(&self, employee_email: Option<String>) -> Result<Vec<WorkReport>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = work_reports::table
            .select(WorkReportRow::as_select())
            .order_by(work_reports::submitted_at.desc())
            .into_boxed();
        if let Some(email) = employee_email {
            query = query.filter(work_reports::employee_email.eq(email));
        }
        let rows: Vec<WorkReportRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        collect_rows(rows.into_iter().map(row_to_report))
    }

    async fn save(
        &self,
        report: &WorkReport,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let report_id = *report.id.as_uuid();
        save_with_revision!(
            self,
            expected_revision,
            insert: {
                table: work_reports::table,
                new_row: WorkReportRow {
                    id: report_id,
                    employee_email: report.employee_email.clone(),
                    start_date: report.start_date,
                    end_date: report.end_date,
                    total_hours: report.total_hours,
                    report_name: report.report_name.clone(),
                    description: report.description.clone(),
                    status: report.status.as_str().to_owned(),
                    manager_comment: report.manager_comment.clone(),
                    submitted_at: report.submitted_at,
                    updated_at: report.updated_at,
                    revision: cast_revision_for_db(report.revision),
                }
            },
            update(expected): {
                table: work_reports::table,
                filter: work_reports::id
                    .eq(report_id)
                    .and(work_reports::revision.eq(cast_revision_for_db(expected))),
                changeset: WorkReportReviewUpdate {
                    status: report.status.as_str(),
                    manager_comment: &report.manager_comment,
                    updated_at: report.updated_at,
                    revision: cast_revision_for_db(report.revision),
                },
                on_zero_rows: |conn, expected| handle_report_update_failure(conn, report_id, expected)
            }
        )
    }
}
