//! Tests for review handlers.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{
    as_employee, as_manager, seed_employee, signed, test_app,
};
use crate::outbound::memory::InMemoryEntityStore;

const BOSS: &str = "boss@corp.test";

#[rstest]
#[case(SubmitReviewRequest { rating: None, ..full_review() })]
#[case(SubmitReviewRequest { tasks_completed: None, ..full_review() })]
#[case(SubmitReviewRequest { review_text: Some(String::new()), ..full_review() })]
fn submission_requires_every_field(#[case] payload: SubmitReviewRequest) {
    let err = parse_review(payload).expect_err("missing field");
    assert_eq!(
        err.message(),
        "Employee ID, review text, rating, and tasksCompleted are required"
    );
}

#[rstest]
fn rating_has_no_range_check() {
    let draft = parse_review(SubmitReviewRequest {
        rating: Some(42.0),
        ..full_review()
    })
    .expect("valid draft");
    assert_eq!(draft.rating, 42.0);
}

#[rstest]
fn amendment_requires_all_three_fields() {
    let err = parse_amendment(UpdateReviewBody {
        tasks_completed: Some(3),
        average_rating: Some(4.0),
        remarks: None,
        expected_revision: None,
    })
    .expect_err("missing remarks");
    assert_eq!(err.message(), "All review fields are required");
}

#[rstest]
fn amendment_accepts_empty_remarks() {
    let (amendment, expected) = parse_amendment(UpdateReviewBody {
        tasks_completed: Some(0),
        average_rating: Some(3.5),
        remarks: Some(String::new()),
        expected_revision: Some(2),
    })
    .expect("empty remarks are present");
    assert_eq!(amendment.remarks, "");
    assert_eq!(amendment.tasks_completed, 0);
    assert_eq!(expected, Some(2));
}

fn full_review() -> SubmitReviewRequest {
    SubmitReviewRequest {
        employee_id: Some(uuid::Uuid::new_v4().to_string()),
        review_text: Some("Reliable".to_owned()),
        rating: Some(4.0),
        tasks_completed: Some(5),
    }
}

#[rstest]
#[actix_web::test]
async fn reviewing_unknown_employee_is_not_found() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager(BOSS))
            .uri("/manager/submitReview")
            .set_json(full_review())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let listed = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::get(), as_manager(BOSS))
            .uri("/manager/allReviews")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn submit_amend_and_summarise() {
    let store = InMemoryEntityStore::new();
    let ana = seed_employee(&store, "Ana", "ana@corp.test").await;
    let app = actix_test::init_service(test_app(&store)).await;

    let submitted = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_manager(BOSS))
            .uri("/manager/submitReview")
            .set_json(SubmitReviewRequest {
                employee_id: Some(ana.id.to_string()),
                ..full_review()
            })
            .to_request(),
    )
    .await;
    assert_eq!(submitted.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(submitted).await;
    assert_eq!(
        body["message"],
        json!("Performance review submitted successfully")
    );
    let review_id = body["review"]["id"].as_str().expect("review id").to_owned();

    let amended = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::put(), as_manager(BOSS))
            .uri(&format!("/manager/updateReview/{review_id}"))
            .set_json(json!({"tasksCompleted": 7, "averageRating": 4.5, "remarks": "Improving"}))
            .to_request(),
    )
    .await;
    assert_eq!(amended.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(amended).await;
    assert_eq!(body["message"], json!("Review updated successfully"));
    assert_eq!(body["review"]["tasksCompleted"], json!(7));
    assert_eq!(body["review"]["remarks"], json!("Improving"));

    let listed = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::get(), as_manager(BOSS))
            .uri("/manager/allReviews")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(body[0]["employeeName"], json!("Ana"));
    assert_eq!(body[0]["employeeEmail"], json!("ana@corp.test"));

    let summary = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::get(), as_manager(BOSS))
            .uri("/manager/reviewSummary")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(summary).await;
    assert_eq!(body["summaries"][0]["reviewCount"], json!(1));
    assert_eq!(body["summaries"][0]["tasksCompleted"], json!(7));

    let own = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::post(), as_employee("ana@corp.test"))
            .uri("/employee/getReviews")
            .set_json(json!({"email": "ana@corp.test"}))
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(own).await;
    assert_eq!(body["reviews"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn amending_unknown_review_is_not_found() {
    let store = InMemoryEntityStore::new();
    let app = actix_test::init_service(test_app(&store)).await;

    let res = actix_test::call_service(
        &app,
        signed(actix_test::TestRequest::put(), as_manager(BOSS))
            .uri(&format!("/manager/updateReview/{}", uuid::Uuid::new_v4()))
            .set_json(json!({"tasksCompleted": 1, "averageRating": 3.0, "remarks": "ok"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], json!("Review not found"));
}
