//! Work report handlers.
//!
//! ```text
//! POST /employee/submitWorkReport    POST /employee/getWorkReports
//! GET  /manager/workReports          POST /manager/updateReportStatus
//! ```
//!
//! The submission field `employeeId` carries the submitter's email.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::UpdateReportStatusRequest;
use crate::domain::{Error, WorkReport, WorkReportDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::EmailRequest;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{ErrorSchema, WorkReportSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_date, parse_id, parse_status, required, required_text,
};

const ALL_FIELDS: &str = "All fields are required";
const REPORT_AND_STATUS: &str = "Report ID and status are required";
const EMAIL_REQUIRED: &str = "Email is required";

/// Report submission.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWorkReportRequest {
    /// Submitter email.
    pub employee_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_hours: Option<f64>,
    pub report_name: Option<String>,
    pub description: Option<String>,
}

/// Manager decision on a report.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportStatusBody {
    pub report_id: Option<String>,
    pub status: Option<String>,
    pub manager_comment: Option<String>,
    pub expected_revision: Option<u32>,
}

/// Stored report with an acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmittedReportResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = WorkReportSchema)]
    pub report: WorkReport,
}

/// Reports, newest submission first.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkReportListResponse {
    pub success: bool,
    #[schema(value_type = Vec<WorkReportSchema>)]
    pub reports: Vec<WorkReport>,
}

/// Report after a decision.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkReportResponse {
    pub success: bool,
    #[schema(value_type = WorkReportSchema)]
    pub report: WorkReport,
}

fn parse_submission(payload: SubmitWorkReportRequest) -> Result<WorkReportDraft, Error> {
    let email = required_text(payload.employee_id, FieldName::new("employeeId"), ALL_FIELDS)?;
    let start = required_text(payload.start_date, FieldName::new("startDate"), ALL_FIELDS)?;
    let end = required_text(payload.end_date, FieldName::new("endDate"), ALL_FIELDS)?;
    let total_hours = required(payload.total_hours, FieldName::new("totalHours"), ALL_FIELDS)?;
    let report_name =
        required_text(payload.report_name, FieldName::new("reportName"), ALL_FIELDS)?;
    let description = payload.description.unwrap_or_default();
    WorkReportDraft::try_new(
        email,
        parse_date(&start, FieldName::new("startDate"))?,
        parse_date(&end, FieldName::new("endDate"))?,
        total_hours,
        report_name,
        description,
    )
    .map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_decision(payload: UpdateReportStatusBody) -> Result<UpdateReportStatusRequest, Error> {
    let report_id =
        required_text(payload.report_id, FieldName::new("reportId"), REPORT_AND_STATUS)?;
    let status = required_text(payload.status, FieldName::new("status"), REPORT_AND_STATUS)?;
    Ok(UpdateReportStatusRequest {
        report_id: parse_id(&report_id, FieldName::new("reportId"))?,
        status: parse_status(&status, FieldName::new("status"))?,
        manager_comment: payload.manager_comment.unwrap_or_default(),
        expected_revision: payload.expected_revision,
    })
}

/// Submit a pending work report.
#[utoipa::path(
    post,
    path = "/employee/submitWorkReport",
    request_body = SubmitWorkReportRequest,
    responses(
        (status = 200, description = "Stored", body = SubmittedReportResponse),
        (status = 400, description = "Missing fields or end before start", body = ErrorSchema),
        (status = 403, description = "Not the caller's email", body = ErrorSchema)
    ),
    tags = ["workReports"],
    operation_id = "submitWorkReport"
)]
#[post("/employee/submitWorkReport")]
pub async fn submit_work_report(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<SubmitWorkReportRequest>,
) -> ApiResult<web::Json<SubmittedReportResponse>> {
    let draft = parse_submission(payload.into_inner())?;
    principal.require_employee(draft.employee_email())?;
    let report = state.work_reports.submit_work_report(draft).await?;
    Ok(web::Json(SubmittedReportResponse {
        success: true,
        message: "Work report submitted successfully".to_owned(),
        report,
    }))
}

/// The caller's reports.
#[utoipa::path(
    post,
    path = "/employee/getWorkReports",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Own reports", body = WorkReportListResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema)
    ),
    tags = ["workReports"],
    operation_id = "getWorkReports"
)]
#[post("/employee/getWorkReports")]
pub async fn get_work_reports(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<WorkReportListResponse>> {
    let email = required_text(payload.into_inner().email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let reports = state.work_reports.list_work_reports(Some(email)).await?;
    Ok(web::Json(WorkReportListResponse {
        success: true,
        reports,
    }))
}

/// Every report.
#[utoipa::path(
    get,
    path = "/manager/workReports",
    responses(
        (status = 200, description = "All reports", body = WorkReportListResponse),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["workReports"],
    operation_id = "listWorkReports"
)]
#[get("/manager/workReports")]
pub async fn list_work_reports(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<WorkReportListResponse>> {
    principal.require_manager()?;
    let reports = state.work_reports.list_work_reports(None).await?;
    Ok(web::Json(WorkReportListResponse {
        success: true,
        reports,
    }))
}

/// Set status and comment on a report.
#[utoipa::path(
    post,
    path = "/manager/updateReportStatus",
    request_body = UpdateReportStatusBody,
    responses(
        (status = 200, description = "Updated", body = WorkReportResponse),
        (status = 400, description = "Missing or unknown status", body = ErrorSchema),
        (status = 404, description = "Report not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["workReports"],
    operation_id = "updateReportStatus"
)]
#[post("/manager/updateReportStatus")]
pub async fn update_report_status(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<UpdateReportStatusBody>,
) -> ApiResult<web::Json<WorkReportResponse>> {
    principal.require_manager()?;
    let request = parse_decision(payload.into_inner())?;
    let report = state.work_reports.update_report_status(request).await?;
    Ok(web::Json(WorkReportResponse {
        success: true,
        report,
    }))
}

#[cfg(test)]
#[path = "work_reports_tests.rs"]
mod tests;
