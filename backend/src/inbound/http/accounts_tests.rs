//! Tests for account handlers.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::{as_employee, seed_employee, test_app};
use crate::outbound::memory::InMemoryEntityStore;

fn registration(role: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some("Ana".to_owned()),
        email: Some("ana@corp.test".to_owned()),
        password: Some("s3cret".to_owned()),
        role: Some(role.to_owned()),
        ..RegisterRequest::default()
    }
}

#[rstest]
#[case(Role::Employee, "Manager", "Only Employees can be registered here")]
#[case(Role::Manager, "Employee", "Only Managers can be registered here")]
#[case(Role::Manager, "Admin", "Only Managers can be registered here")]
fn registration_role_must_match_table(
    #[case] table: Role,
    #[case] claimed: &str,
    #[case] message: &str,
) {
    let err = parse_registration(table, registration(claimed)).expect_err("wrong table");
    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert_eq!(err.message(), message);
}

#[rstest]
fn registration_requires_password() {
    let payload = RegisterRequest {
        password: None,
        ..registration("Employee")
    };
    let err = parse_registration(Role::Employee, payload).expect_err("missing password");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), ALL_FIELDS);
}

#[rstest]
fn manager_registration_drops_contact_fields() {
    let payload = RegisterRequest {
        phone: Some("555".to_owned()),
        ..registration("Manager")
    };
    let parsed = parse_registration(Role::Manager, payload).expect("valid");
    assert_eq!(parsed.contact(), &ContactDetails::default());
}

#[rstest]
#[actix_web::test]
async fn register_then_login_round_trip() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/employee/register")
            .set_json(registration("Employee"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Employee registered successfully"));

    let duplicate = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/employee/register")
            .set_json(registration("Employee"))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(duplicate).await;
    assert_eq!(body["error"], json!("Employee already exists"));

    let login = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/employee/login")
            .set_json(json!({"email": "ana@corp.test", "password": "s3cret"}))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(login).await;
    assert_eq!(body["message"], json!("Login successful"));
    assert_eq!(body["user"]["email"], json!("ana@corp.test"));
    assert_eq!(body["user"]["role"], json!("Employee"));
}

#[rstest]
#[case("ana@corp.test", "wrong", StatusCode::UNAUTHORIZED, "Invalid credentials")]
#[case("nobody@corp.test", "secret", StatusCode::NOT_FOUND, "Employee not found")]
#[actix_web::test]
async fn login_failures(
    #[case] email: &str,
    #[case] password: &str,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let store = InMemoryEntityStore::new();
    seed_employee(&store, "Ana", "ana@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/employee/login")
            .set_json(json!({"email": email, "password": password}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), status);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], json!(message));
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[actix_web::test]
async fn profile_update_is_partial_and_self_only() {
    let store = InMemoryEntityStore::new();
    seed_employee(&store, "Ana", "ana@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let mut foreign = actix_test::TestRequest::post()
        .uri("/employee/getProfile")
        .set_json(json!({"email": "ana@corp.test"}));
    for header in as_employee("ben@corp.test") {
        foreign = foreign.insert_header(header);
    }
    let res = actix_test::call_service(&app, foreign.to_request()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let mut update = actix_test::TestRequest::post()
        .uri("/employee/updateProfile")
        .set_json(json!({"email": "ana@corp.test", "department": "Finance"}));
    for header in as_employee("ana@corp.test") {
        update = update.insert_header(header);
    }
    let res = actix_test::call_service(&app, update.to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Profile updated successfully"));
    assert_eq!(body["profile"]["department"], json!("Finance"));
    assert_eq!(body["profile"]["name"], json!("Ana"));
}

#[rstest]
#[actix_web::test]
async fn case_variant_email_cannot_reach_another_profile() {
    let store = InMemoryEntityStore::new();
    seed_employee(&store, "Ana", "ana@corp.test").await;
    seed_employee(&store, "Other Ana", "Ana@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let mut update = actix_test::TestRequest::post()
        .uri("/employee/updateProfile")
        .set_json(json!({"email": "Ana@corp.test", "name": "Renamed"}));
    for header in as_employee("ana@corp.test") {
        update = update.insert_header(header);
    }
    let res = actix_test::call_service(&app, update.to_request()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let mut profile = actix_test::TestRequest::post()
        .uri("/employee/getProfile")
        .set_json(json!({"email": "Ana@corp.test"}));
    for header in as_employee("Ana@corp.test") {
        profile = profile.insert_header(header);
    }
    let res = actix_test::call_service(&app, profile.to_request()).await;
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["profile"]["name"], json!("Other Ana"));
}
