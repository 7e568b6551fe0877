//! Attendance summary handler.

use actix_web::{post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AttendanceSheet, AttendanceSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::EmailRequest;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{AttendanceSummarySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, required_text};

/// Current-month sheet with present/absent counts.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub attendance: AttendanceSheet,
    #[schema(value_type = AttendanceSummarySchema)]
    pub summary: AttendanceSummary,
}

/// Summarise the caller's attendance for the current month.
#[utoipa::path(
    post,
    path = "/employee/getAttendance",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Sheet and summary", body = AttendanceResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["attendance"],
    operation_id = "getAttendance"
)]
#[post("/employee/getAttendance")]
pub async fn get_attendance(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<AttendanceResponse>> {
    let email = required_text(
        payload.into_inner().email,
        FieldName::new("email"),
        "Email is required",
    )?;
    principal.require_employee(&email)?;
    let overview = state.attendance.attendance_summary(&email).await?;
    Ok(web::Json(AttendanceResponse {
        success: true,
        attendance: overview.attendance,
        summary: overview.summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::{NaiveDate, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::{AttendanceRecord, AttendanceStatus, MonthKey};
    use crate::inbound::http::test_utils::{as_employee, seed_employee, signed, test_app};
    use crate::outbound::memory::InMemoryEntityStore;

    fn records(status: &str, count: usize) -> impl Iterator<Item = AttendanceRecord> + '_ {
        (1..=count).map(move |day| AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, u32::try_from(day).expect("day fits"))
                .expect("valid day"),
            status: AttendanceStatus::from(status.to_owned()),
        })
    }

    #[rstest]
    #[actix_web::test]
    async fn summarises_current_month() {
        let store = InMemoryEntityStore::new();
        let eve = seed_employee(&store, "Eve", "e@x.com").await;
        let sheet = AttendanceSheet {
            employee_id: eve.id,
            month: MonthKey::containing(Utc::now()),
            records: records("present", 18)
                .chain(records("absent", 2))
                .chain(records("leave", 1))
                .collect(),
        };
        store.insert_attendance(sheet).expect("seed attendance");
        let app = actix_test::init_service(test_app(&store)).await;

        let res = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::post(), as_employee("e@x.com"))
                .uri("/employee/getAttendance")
                .set_json(json!({"email": "e@x.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body["summary"],
            json!({"present": 18, "absent": 2, "total": 20})
        );
        assert_eq!(body["attendance"]["records"].as_array().map(Vec::len), Some(21));
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_month_counts_zero() {
        let store = InMemoryEntityStore::new();
        seed_employee(&store, "Eve", "e@x.com").await;
        let app = actix_test::init_service(test_app(&store)).await;

        let res = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::post(), as_employee("e@x.com"))
                .uri("/employee/getAttendance")
                .set_json(json!({"email": "e@x.com"}))
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["summary"]["total"], json!(0));
        assert_eq!(body["attendance"]["records"], json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let store = InMemoryEntityStore::new();
        let app = actix_test::init_service(test_app(&store)).await;

        let res = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::post(), as_employee("ghost@x.com"))
                .uri("/employee/getAttendance")
                .set_json(json!({"email": "ghost@x.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
