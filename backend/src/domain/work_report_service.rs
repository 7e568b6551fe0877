//! Work report submission and review.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{UpdateReportStatusRequest, WorkReportRepository, WorkReportWorkflow};
use crate::domain::revision::ensure_expected_revision;
use crate::domain::store_errors::map_store_error;
use crate::domain::work_report::sort_newest_first;
use crate::domain::{Error, WorkReport, WorkReportDraft};

/// Work report workflow service.
pub struct WorkReportService<W> {
    reports: Arc<W>,
    clock: Arc<dyn Clock>,
}

impl<W> WorkReportService<W> {
    /// Create the service.
    pub fn new(reports: Arc<W>, clock: Arc<dyn Clock>) -> Self {
        Self { reports, clock }
    }
}

#[async_trait]
impl<W> WorkReportWorkflow for WorkReportService<W>
where
    W: WorkReportRepository,
{
    async fn submit_work_report(&self, draft: WorkReportDraft) -> Result<WorkReport, Error> {
        let report = WorkReport::submit(draft, self.clock.utc());
        self.reports
            .save(&report, None)
            .await
            .map_err(map_store_error)?;
        info!(report_id = %report.id, "work report submitted");
        Ok(report)
    }

    async fn list_work_reports(
        &self,
        employee_email: Option<String>,
    ) -> Result<Vec<WorkReport>, Error> {
        let mut reports = self
            .reports
            .list(employee_email)
            .await
            .map_err(map_store_error)?;
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    async fn update_report_status(
        &self,
        request: UpdateReportStatusRequest,
    ) -> Result<WorkReport, Error> {
        let current = self
            .reports
            .find_by_id(&request.report_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Report not found"))?;
        ensure_expected_revision(request.expected_revision, current.revision)?;

        let next = current.reviewed(request.status, request.manager_comment, self.clock.utc());
        self.reports
            .save(&next, Some(current.revision))
            .await
            .map_err(map_store_error)?;
        info!(
            report_id = %next.id,
            status = %next.status,
            revision = next.revision,
            "work report reviewed"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockWorkReportRepository;
    use crate::domain::test_fixtures::{fixture_clock, fixture_now, jan};
    use crate::domain::{ErrorCode, ReportId, ReportStatus};
    use chrono::Duration;

    fn make_service(repo: MockWorkReportRepository) -> WorkReportService<MockWorkReportRepository> {
        WorkReportService::new(Arc::new(repo), fixture_clock())
    }

    fn report_at(offset_hours: i64) -> WorkReport {
        let draft = WorkReportDraft::try_new("e@x.com", jan(1), jan(5), 38.0, "Week 1", "")
            .expect("valid draft");
        WorkReport::submit(draft, fixture_now() + Duration::hours(offset_hours))
    }

    #[tokio::test]
    async fn submission_is_pending_and_stamped_with_clock() {
        let mut repo = MockWorkReportRepository::new();
        repo.expect_save()
            .withf(|report, expected| report.status == ReportStatus::Pending && expected.is_none())
            .times(1)
            .return_once(|_, _| Ok(()));
        let draft = WorkReportDraft::try_new("e@x.com", jan(1), jan(1), 8.0, "Day", "")
            .expect("valid draft");

        let report = make_service(repo)
            .submit_work_report(draft)
            .await
            .expect("submitted");
        assert_eq!(report.submitted_at, fixture_now());
    }

    #[tokio::test]
    async fn listing_is_newest_submission_first() {
        let (t1, t2, t3) = (report_at(1), report_at(2), report_at(3));
        let expected = vec![t3.id, t2.id, t1.id];
        let mut repo = MockWorkReportRepository::new();
        repo.expect_list()
            .withf(|email| email.as_deref() == Some("e@x.com"))
            .times(1)
            .return_once(move |_| Ok(vec![t2, t1, t3]));

        let listed = make_service(repo)
            .list_work_reports(Some("e@x.com".to_owned()))
            .await
            .expect("listed");
        assert_eq!(listed.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
    }

    #[tokio::test]
    async fn status_and_comment_change_together() {
        let report = report_at(0);
        let report_id = report.id;
        let mut repo = MockWorkReportRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(report)));
        repo.expect_save()
            .withf(|next, expected| {
                next.status == ReportStatus::Rejected
                    && next.manager_comment == "missing Friday"
                    && *expected == Some(1)
            })
            .times(1)
            .return_once(|_, _| Ok(()));

        let updated = make_service(repo)
            .update_report_status(UpdateReportStatusRequest {
                report_id,
                status: ReportStatus::Rejected,
                manager_comment: "missing Friday".to_owned(),
                expected_revision: None,
            })
            .await
            .expect("updated");
        assert_eq!(updated.revision, 2);
    }

    #[tokio::test]
    async fn missing_report_is_not_found() {
        let mut repo = MockWorkReportRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
        repo.expect_save().never();

        let error = make_service(repo)
            .update_report_status(UpdateReportStatusRequest {
                report_id: ReportId::random(),
                status: ReportStatus::Approved,
                manager_comment: String::new(),
                expected_revision: None,
            })
            .await
            .expect_err("not found");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Report not found");
    }
}
