//! Tests for leave handlers.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::LeaveStatus;
use crate::inbound::http::test_utils::{
    as_employee, as_manager, seed_employee, signed, test_app,
};
use crate::outbound::memory::InMemoryEntityStore;

#[rstest]
fn decision_parses_status_loosely() {
    let request = parse_decision(UpdateLeaveStatusBody {
        leave_id: Some(uuid::Uuid::new_v4().to_string()),
        status: Some("approved".to_owned()),
        expected_revision: Some(1),
    })
    .expect("valid decision");
    assert_eq!(request.status, LeaveStatus::Approved);
    assert_eq!(request.expected_revision, Some(1));
}

#[rstest]
#[case(UpdateLeaveStatusBody { leave_id: None, status: Some("Approved".into()), expected_revision: None }, "Leave ID and status are required")]
#[case(UpdateLeaveStatusBody { leave_id: Some(uuid::Uuid::nil().to_string()), status: Some("Maybe".into()), expected_revision: None }, "status must be one of")]
fn decision_rejects_bad_input(#[case] payload: UpdateLeaveStatusBody, #[case] fragment: &str) {
    let err = parse_decision(payload).expect_err("invalid decision");
    assert!(
        err.message().contains(fragment),
        "{} should mention {fragment}",
        err.message()
    );
}

#[rstest]
#[actix_web::test]
async fn reversed_dates_are_still_filed_as_pending() {
    let store = InMemoryEntityStore::new();
    seed_employee(&store, "Eve", "e@x.com").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("e@x.com"))
            .uri("/employee/applyLeave")
            .set_json(json!({
                "startDate": "2025-01-10",
                "endDate": "2025-01-05",
                "email": "e@x.com",
                "reason": "trip",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["leaveHistory"][0]["status"], json!("Pending"));
    assert_eq!(body["leaveHistory"][0]["email"], json!("e@x.com"));
}

#[rstest]
#[actix_web::test]
async fn manager_lists_and_decides() {
    let store = InMemoryEntityStore::new();
    seed_employee(&store, "Eve", "e@x.com").await;
    let app = actix_test::init_service(test_app(&store)).await;
    let filed = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("e@x.com"))
            .uri("/employee/applyLeave")
            .set_json(json!({
                "startDate": "2025-02-03",
                "endDate": "2025-02-04T00:00:00Z",
                "email": "e@x.com",
                "reason": "dentist",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(filed.status(), StatusCode::OK);

    let listed = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::get(), as_manager("boss@corp.test"))
            .uri("/manager/getLeaveRequests")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    let leave = &body["leaves"][0];
    assert_eq!(leave["employeeName"], json!("Eve"));
    assert_eq!(leave["employeeEmail"], json!("e@x.com"));
    assert_eq!(leave["endDate"], json!("2025-02-04"));
    let leave_id = leave["id"].clone();

    let decided = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager("boss@corp.test"))
            .uri("/manager/updateLeaveStatus")
            .set_json(json!({"leaveId": leave_id, "status": "Approved"}))
            .to_request(),
    )
    .await;
    assert_eq!(decided.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(decided).await;
    assert_eq!(body["leave"]["status"], json!("Approved"));
}

#[rstest]
#[actix_web::test]
async fn deciding_unknown_leave_is_not_found() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager("boss@corp.test"))
            .uri("/manager/updateLeaveStatus")
            .set_json(json!({"leaveId": uuid::Uuid::new_v4(), "status": "Rejected"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], json!("Leave not found"));
}

#[rstest]
#[actix_web::test]
async fn employees_cannot_read_foreign_history() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("mallory@x.com"))
            .uri("/employee/getLeaves")
            .set_json(json!({"email": "e@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
