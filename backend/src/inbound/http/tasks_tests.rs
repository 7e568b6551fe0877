//! Tests for task handlers.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::{
    as_employee, as_manager, seed_employee, signed, test_app,
};
use crate::outbound::memory::InMemoryEntityStore;

const BOSS: &str = "boss@corp.test";

#[rstest]
#[case(AssignTaskRequest { title: None, ..valid_assignment() })]
#[case(AssignTaskRequest { deadline: Some("  ".to_owned()), ..valid_assignment() })]
fn assignment_reports_missing_fields(#[case] payload: AssignTaskRequest) {
    let err = parse_assignment(payload).expect_err("missing field");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "All fields are required");
}

#[rstest]
fn assignment_rejects_malformed_employee_id() {
    let payload = AssignTaskRequest {
        employee_id: Some("not-a-uuid".to_owned()),
        ..valid_assignment()
    };
    let err = parse_assignment(payload).expect_err("bad id");
    assert_eq!(err.message(), "employeeId must be a valid UUID");
}

fn valid_assignment() -> AssignTaskRequest {
    AssignTaskRequest {
        employee_id: Some(uuid::Uuid::new_v4().to_string()),
        title: Some("Audit".to_owned()),
        description: Some("Quarterly audit".to_owned()),
        deadline: Some("2025-03-31".to_owned()),
    }
}

async fn assign(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    employee_id: &str,
) -> Value {
    let res = actix_test::call_service(
        app,
        signed(actix_test::TestRequest::post(), as_manager(BOSS))
            .uri("/manager/assignTask")
            .set_json(json!({
                "employeeId": employee_id,
                "title": "Audit",
                "description": "Quarterly audit",
                "deadline": "2025-03-31T17:00:00Z",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

#[rstest]
#[actix_web::test]
async fn manager_assigns_and_moves_task() {
    let store = InMemoryEntityStore::new();
    let ana = seed_employee(&store, "Ana", "ana@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let body = assign(&app, &ana.id.to_string()).await;
    assert_eq!(body["message"], json!("Task assigned successfully"));
    assert_eq!(body["employeeName"], json!("Ana"));
    assert_eq!(body["task"]["status"], json!("Pending"));
    let task_id = body["task"]["id"].as_str().expect("task id").to_owned();

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::put(), as_manager(BOSS))
            .uri(&format!("/manager/tasks/{task_id}/status"))
            .set_json(json!({"status": "In Progress", "expectedRevision": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Task status updated"));
    assert_eq!(body["task"]["status"], json!("InProgress"));
    assert_eq!(body["task"]["revision"], json!(2));

    let stale = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager(BOSS))
            .uri("/manager/updateTaskStatus")
            .set_json(json!({"taskId": task_id, "status": "Completed", "expectedRevision": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(stale.status(), StatusCode::CONFLICT);
}

#[rstest]
#[actix_web::test]
async fn put_without_status_is_rejected() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;
    let task_id = uuid::Uuid::new_v4();

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::put(), as_manager(BOSS))
            .uri(&format!("/manager/tasks/{task_id}/status"))
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], json!("Status is required"));
}

#[rstest]
#[actix_web::test]
async fn unknown_task_is_not_found() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager(BOSS))
            .uri("/manager/updateTaskStatus")
            .set_json(json!({"taskId": uuid::Uuid::new_v4(), "status": "Completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], json!("Task not found"));
}

#[rstest]
#[actix_web::test]
async fn employees_only_move_their_own_tasks() {
    let store = InMemoryEntityStore::new();
    let ana = seed_employee(&store, "Ana", "ana@corp.test").await;
    seed_employee(&store, "Ben", "ben@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;
    let body = assign(&app, &ana.id.to_string()).await;
    let task_id = body["task"]["id"].clone();

    let foreign = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("ben@corp.test"))
            .uri("/employee/updateTaskStatus")
            .set_json(json!({"email": "ben@corp.test", "taskId": task_id, "status": "Completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);

    let own = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("ana@corp.test"))
            .uri("/employee/updateTaskStatus")
            .set_json(json!({"email": "ana@corp.test", "taskId": task_id, "status": "Completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(own.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(own).await;
    assert_eq!(body["message"], json!("Task status updated successfully"));

    let listed = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("ana@corp.test"))
            .uri("/employee/getTasks")
            .set_json(json!({"email": "ana@corp.test"}))
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["tasks"][0]["status"], json!("Completed"));
}

#[rstest]
#[case(None, StatusCode::UNAUTHORIZED)]
#[case(Some("Employee"), StatusCode::FORBIDDEN)]
#[actix_web::test]
async fn manager_routes_require_manager_role(
    #[case] role: Option<&str>,
    #[case] status: StatusCode,
) {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;
    let mut request = actix_test::TestRequest::post()
        .uri("/manager/assignTask")
        .set_json(json!({}));
    if let Some(role) = role {
        request = signed(request, [
            (crate::inbound::http::principal::ROLE_HEADER, role.to_owned()),
            (crate::inbound::http::principal::EMAIL_HEADER, "ana@corp.test".to_owned()),
        ]);
    }
    let res = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(res.status(), status);
}
