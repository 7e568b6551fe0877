//! Leave request handlers.
//!
//! ```text
//! POST /employee/applyLeave          POST /employee/getLeaves
//! GET  /manager/getLeaveRequests     POST /manager/updateLeaveStatus
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{EnrichedLeave, UpdateLeaveStatusRequest};
use crate::domain::{Error, LeaveDraft, LeaveRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::EmailRequest;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{ErrorSchema, LeaveRequestSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_date, parse_id, parse_status, required_text,
};

const ALL_FIELDS: &str = "All fields are required";
const LEAVE_AND_STATUS: &str = "Leave ID and status are required";
const EMAIL_REQUIRED: &str = "Email is required";

/// Leave application.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub email: Option<String>,
    pub reason: Option<String>,
}

/// Manager decision.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveStatusBody {
    pub leave_id: Option<String>,
    /// `Pending`, `Approved` or `Rejected`.
    pub status: Option<String>,
    pub expected_revision: Option<u32>,
}

/// Applicant's history after filing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveHistoryResponse {
    pub success: bool,
    #[schema(value_type = Vec<LeaveRequestSchema>)]
    pub leave_history: Vec<LeaveRequest>,
}

/// Own leave requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub success: bool,
    #[schema(value_type = Vec<LeaveRequestSchema>)]
    pub leaves: Vec<LeaveRequest>,
}

/// Every request with applicant name and email.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveRequestsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub leaves: Vec<EnrichedLeave>,
}

/// Request after a decision.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveResponse {
    pub success: bool,
    #[schema(value_type = LeaveRequestSchema)]
    pub leave: LeaveRequest,
}

fn parse_application(payload: ApplyLeaveRequest) -> Result<LeaveDraft, Error> {
    let start = required_text(payload.start_date, FieldName::new("startDate"), ALL_FIELDS)?;
    let end = required_text(payload.end_date, FieldName::new("endDate"), ALL_FIELDS)?;
    let email = required_text(payload.email, FieldName::new("email"), ALL_FIELDS)?;
    let reason = required_text(payload.reason, FieldName::new("reason"), ALL_FIELDS)?;
    Ok(LeaveDraft {
        employee_email: email,
        start_date: parse_date(&start, FieldName::new("startDate"))?,
        end_date: parse_date(&end, FieldName::new("endDate"))?,
        reason,
    })
}

fn parse_decision(payload: UpdateLeaveStatusBody) -> Result<UpdateLeaveStatusRequest, Error> {
    let leave_id = required_text(payload.leave_id, FieldName::new("leaveId"), LEAVE_AND_STATUS)?;
    let status = required_text(payload.status, FieldName::new("status"), LEAVE_AND_STATUS)?;
    Ok(UpdateLeaveStatusRequest {
        leave_id: parse_id(&leave_id, FieldName::new("leaveId"))?,
        status: parse_status(&status, FieldName::new("status"))?,
        expected_revision: payload.expected_revision,
    })
}

/// File a pending leave request.
#[utoipa::path(
    post,
    path = "/employee/applyLeave",
    request_body = ApplyLeaveRequest,
    responses(
        (status = 200, description = "Filed; full history returned", body = LeaveHistoryResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorSchema),
        (status = 403, description = "Not the caller's email", body = ErrorSchema)
    ),
    tags = ["leaves"],
    operation_id = "applyLeave"
)]
#[post("/employee/applyLeave")]
pub async fn apply_leave(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<ApplyLeaveRequest>,
) -> ApiResult<web::Json<LeaveHistoryResponse>> {
    let draft = parse_application(payload.into_inner())?;
    principal.require_employee(&draft.employee_email)?;
    let leave_history = state.leaves.apply_leave(draft).await?;
    Ok(web::Json(LeaveHistoryResponse {
        success: true,
        leave_history,
    }))
}

/// The caller's leave requests in filing order.
#[utoipa::path(
    post,
    path = "/employee/getLeaves",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Leave history", body = LeaveListResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema)
    ),
    tags = ["leaves"],
    operation_id = "getLeaves"
)]
#[post("/employee/getLeaves")]
pub async fn get_leaves(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<LeaveListResponse>> {
    let email = required_text(payload.into_inner().email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let leaves = state.leaves.leave_history(&email).await?;
    Ok(web::Json(LeaveListResponse {
        success: true,
        leaves,
    }))
}

/// Every leave request, newest first.
#[utoipa::path(
    get,
    path = "/manager/getLeaveRequests",
    responses(
        (status = 200, description = "Enriched leave requests", body = LeaveRequestsResponse),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["leaves"],
    operation_id = "getLeaveRequests"
)]
#[get("/manager/getLeaveRequests")]
pub async fn get_leave_requests(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<LeaveRequestsResponse>> {
    principal.require_manager()?;
    let leaves = state.leaves.list_leave_requests().await?;
    Ok(web::Json(LeaveRequestsResponse {
        success: true,
        leaves,
    }))
}

/// Approve or reject a leave request.
#[utoipa::path(
    post,
    path = "/manager/updateLeaveStatus",
    request_body = UpdateLeaveStatusBody,
    responses(
        (status = 200, description = "Updated", body = LeaveResponse),
        (status = 400, description = "Missing or unknown status", body = ErrorSchema),
        (status = 404, description = "Leave not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["leaves"],
    operation_id = "updateLeaveStatus"
)]
#[post("/manager/updateLeaveStatus")]
pub async fn update_leave_status(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<UpdateLeaveStatusBody>,
) -> ApiResult<web::Json<LeaveResponse>> {
    principal.require_manager()?;
    let request = parse_decision(payload.into_inner())?;
    let leave = state.leaves.update_leave_status(request).await?;
    Ok(web::Json(LeaveResponse {
        success: true,
        leave,
    }))
}

#[cfg(test)]
#[path = "leaves_tests.rs"]
mod tests;
