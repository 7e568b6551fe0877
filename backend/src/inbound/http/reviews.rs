//! Performance review handlers.
//!
//! ```text
//! POST /manager/submitReview           GET /manager/allReviews
//! PUT  /manager/updateReview/{id}      GET /manager/reviewSummary
//! POST /employee/getReviews
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{EnrichedReview, UpdateReviewRequest};
use crate::domain::{Error, Review, ReviewAmendment, ReviewDraft, ReviewRollup};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::EmailRequest;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{ErrorSchema, ReviewSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, required, required_text};

const SUBMIT_FIELDS: &str = "Employee ID, review text, rating, and tasksCompleted are required";
const AMEND_FIELDS: &str = "All review fields are required";
const EMAIL_REQUIRED: &str = "Email is required";

/// New review.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub employee_id: Option<String>,
    pub review_text: Option<String>,
    /// No range is enforced.
    pub rating: Option<f64>,
    pub tasks_completed: Option<u32>,
}

/// Replacement for the amendable fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewBody {
    pub tasks_completed: Option<u32>,
    pub average_rating: Option<f64>,
    pub remarks: Option<String>,
    pub expected_revision: Option<u32>,
}

/// Acknowledgement carrying the stored review.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub message: String,
    #[schema(value_type = ReviewSchema)]
    pub review: Review,
}

/// Per-employee aggregates.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewSummaryResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub summaries: Vec<ReviewRollup>,
}

/// Reviews of the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub success: bool,
    #[schema(value_type = Vec<ReviewSchema>)]
    pub reviews: Vec<Review>,
}

fn parse_review(payload: SubmitReviewRequest) -> Result<ReviewDraft, Error> {
    let employee_id =
        required_text(payload.employee_id, FieldName::new("employeeId"), SUBMIT_FIELDS)?;
    let review_text =
        required_text(payload.review_text, FieldName::new("reviewText"), SUBMIT_FIELDS)?;
    let rating = required(payload.rating, FieldName::new("rating"), SUBMIT_FIELDS)?;
    let tasks_completed = required(
        payload.tasks_completed,
        FieldName::new("tasksCompleted"),
        SUBMIT_FIELDS,
    )?;
    Ok(ReviewDraft {
        employee_id: parse_id(&employee_id, FieldName::new("employeeId"))?,
        review_text,
        rating,
        tasks_completed,
    })
}

fn parse_amendment(payload: UpdateReviewBody) -> Result<(ReviewAmendment, Option<u32>), Error> {
    let tasks_completed = required(
        payload.tasks_completed,
        FieldName::new("tasksCompleted"),
        AMEND_FIELDS,
    )?;
    let average_rating = required(
        payload.average_rating,
        FieldName::new("averageRating"),
        AMEND_FIELDS,
    )?;
    let remarks = required(payload.remarks, FieldName::new("remarks"), AMEND_FIELDS)?;
    Ok((
        ReviewAmendment {
            tasks_completed,
            average_rating,
            remarks,
        },
        payload.expected_revision,
    ))
}

/// Review an existing employee.
#[utoipa::path(
    post,
    path = "/manager/submitReview",
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Stored", body = ReviewResponse),
        (status = 400, description = "Missing fields", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "submitReview"
)]
#[post("/manager/submitReview")]
pub async fn submit_review(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<SubmitReviewRequest>,
) -> ApiResult<web::Json<ReviewResponse>> {
    principal.require_manager()?;
    let draft = parse_review(payload.into_inner())?;
    let review = state.reviews.submit_review(draft).await?;
    Ok(web::Json(ReviewResponse {
        message: "Performance review submitted successfully".to_owned(),
        review,
    }))
}

/// Every review, newest first, with employee name and email.
#[utoipa::path(
    get,
    path = "/manager/allReviews",
    responses(
        (status = 200, description = "Reviews with employeeName and employeeEmail", body = Vec<ReviewSchema>),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "allReviews"
)]
#[get("/manager/allReviews")]
pub async fn all_reviews(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Vec<EnrichedReview>>> {
    principal.require_manager()?;
    Ok(web::Json(state.reviews.list_reviews().await?))
}

/// Replace tasksCompleted, averageRating and remarks.
#[utoipa::path(
    put,
    path = "/manager/updateReview/{reviewId}",
    params(("reviewId" = String, Path, description = "Review identifier")),
    request_body = UpdateReviewBody,
    responses(
        (status = 200, description = "Updated", body = ReviewResponse),
        (status = 400, description = "Missing fields", body = ErrorSchema),
        (status = 404, description = "Review not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "updateReview"
)]
#[put("/manager/updateReview/{reviewId}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<String>,
    payload: web::Json<UpdateReviewBody>,
) -> ApiResult<web::Json<ReviewResponse>> {
    principal.require_manager()?;
    let review_id = parse_id(&path.into_inner(), FieldName::new("reviewId"))?;
    let (amendment, expected_revision) = parse_amendment(payload.into_inner())?;
    let review = state
        .reviews
        .update_review(UpdateReviewRequest {
            review_id,
            amendment,
            expected_revision,
        })
        .await?;
    Ok(web::Json(ReviewResponse {
        message: "Review updated successfully".to_owned(),
        review,
    }))
}

/// Per-employee review counts, mean rating and task totals.
#[utoipa::path(
    get,
    path = "/manager/reviewSummary",
    responses(
        (status = 200, description = "Rollups", body = ReviewSummaryResponse),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "reviewSummary"
)]
#[get("/manager/reviewSummary")]
pub async fn review_summary(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<ReviewSummaryResponse>> {
    principal.require_manager()?;
    let summaries = state.reviews.review_rollups().await?;
    Ok(web::Json(ReviewSummaryResponse {
        success: true,
        summaries,
    }))
}

/// The caller's reviews.
#[utoipa::path(
    post,
    path = "/employee/getReviews",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Own reviews, newest first", body = ReviewListResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "getReviews"
)]
#[post("/employee/getReviews")]
pub async fn get_reviews(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<ReviewListResponse>> {
    let email = required_text(payload.into_inner().email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let reviews = state.reviews.reviews_for_employee(&email).await?;
    Ok(web::Json(ReviewListResponse {
        success: true,
        reviews,
    }))
}

#[cfg(test)]
#[path = "reviews_tests.rs"]
mod tests;
