//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HR endpoint from the inbound layer, the health
//! probes, and the schema wrappers that describe domain types without
//! coupling them to utoipa. The document is served by Swagger UI in debug
//! builds and printed by the `openapi-dump` binary.

use crate::inbound::http::accounts::{
    EmailRequest, LoginRequest, LoginResponse, MessageResponse, ProfileResponse, RegisterRequest,
    UpdateProfileRequest,
};
use crate::inbound::http::attendance::AttendanceResponse;
use crate::inbound::http::leaves::{
    ApplyLeaveRequest, LeaveHistoryResponse, LeaveListResponse, LeaveRequestsResponse,
    LeaveResponse, UpdateLeaveStatusBody,
};
use crate::inbound::http::principal::{EMAIL_HEADER, ROLE_HEADER};
use crate::inbound::http::reviews::{
    ReviewListResponse, ReviewResponse, ReviewSummaryResponse, SubmitReviewRequest,
    UpdateReviewBody,
};
use crate::inbound::http::schemas::{
    AttendanceSummarySchema, EmployeeProfileSchema, ErrorCodeSchema, ErrorSchema,
    LeaveRequestSchema, ReviewSchema, TaskSchema, TodoSchema, WorkReportSchema,
};
use crate::inbound::http::tasks::{
    AssignTaskRequest, AssignTaskResponse, TaskListResponse, TaskStatusBody, TaskStatusResponse,
    UpdateTaskStatusBody,
};
use crate::inbound::http::team::{AddEmployeeRequest, AddEmployeeResponse, DashboardResponse, TeamResponse};
use crate::inbound::http::todos::{AddTodoRequest, TodoListResponse, TodoRefRequest, TodoResponse};
use crate::inbound::http::work_reports::{
    SubmitWorkReportRequest, SubmittedReportResponse, UpdateReportStatusBody,
    WorkReportListResponse, WorkReportResponse,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Describe the identity headers set by the authentication gateway.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AuthenticatedRole",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                ROLE_HEADER,
                "Verified role claim (`Employee` or `Manager`).",
            ))),
        );
        components.add_security_scheme(
            "AuthenticatedEmail",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                EMAIL_HEADER,
                "Verified email of the caller.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "HR backend API",
        description = "Employee and manager workflows: tasks, leave, work reports, reviews, attendance, teams and to-dos."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("AuthenticatedRole" = [], "AuthenticatedEmail" = [])),
    paths(
        crate::inbound::http::accounts::register_employee,
        crate::inbound::http::accounts::register_manager,
        crate::inbound::http::accounts::employee_login,
        crate::inbound::http::accounts::manager_login,
        crate::inbound::http::accounts::get_profile,
        crate::inbound::http::accounts::update_profile,
        crate::inbound::http::tasks::assign_task,
        crate::inbound::http::tasks::put_task_status,
        crate::inbound::http::tasks::manager_update_task_status,
        crate::inbound::http::tasks::get_tasks,
        crate::inbound::http::tasks::employee_update_task_status,
        crate::inbound::http::leaves::apply_leave,
        crate::inbound::http::leaves::get_leaves,
        crate::inbound::http::leaves::get_leave_requests,
        crate::inbound::http::leaves::update_leave_status,
        crate::inbound::http::work_reports::submit_work_report,
        crate::inbound::http::work_reports::get_work_reports,
        crate::inbound::http::work_reports::list_work_reports,
        crate::inbound::http::work_reports::update_report_status,
        crate::inbound::http::reviews::submit_review,
        crate::inbound::http::reviews::all_reviews,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::review_summary,
        crate::inbound::http::reviews::get_reviews,
        crate::inbound::http::attendance::get_attendance,
        crate::inbound::http::team::list_employees,
        crate::inbound::http::team::add_employee,
        crate::inbound::http::team::team,
        crate::inbound::http::team::dashboard,
        crate::inbound::http::todos::get_todos,
        crate::inbound::http::todos::add_todo,
        crate::inbound::http::todos::toggle_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        EmployeeProfileSchema,
        TaskSchema,
        LeaveRequestSchema,
        WorkReportSchema,
        ReviewSchema,
        TodoSchema,
        AttendanceSummarySchema,
        RegisterRequest,
        LoginRequest,
        EmailRequest,
        UpdateProfileRequest,
        MessageResponse,
        LoginResponse,
        ProfileResponse,
        AssignTaskRequest,
        TaskStatusBody,
        UpdateTaskStatusBody,
        AssignTaskResponse,
        TaskStatusResponse,
        TaskListResponse,
        ApplyLeaveRequest,
        UpdateLeaveStatusBody,
        LeaveHistoryResponse,
        LeaveListResponse,
        LeaveRequestsResponse,
        LeaveResponse,
        SubmitWorkReportRequest,
        UpdateReportStatusBody,
        SubmittedReportResponse,
        WorkReportListResponse,
        WorkReportResponse,
        SubmitReviewRequest,
        UpdateReviewBody,
        ReviewResponse,
        ReviewSummaryResponse,
        ReviewListResponse,
        AttendanceResponse,
        AddEmployeeRequest,
        AddEmployeeResponse,
        TeamResponse,
        DashboardResponse,
        AddTodoRequest,
        TodoRefRequest,
        TodoListResponse,
        TodoResponse,
    )),
    tags(
        (name = "accounts", description = "Registration, login and profiles"),
        (name = "tasks", description = "Task assignment and progress"),
        (name = "leaves", description = "Leave requests"),
        (name = "workReports", description = "Work reports"),
        (name = "reviews", description = "Performance reviews"),
        (name = "attendance", description = "Monthly attendance"),
        (name = "team", description = "Team membership and staff views"),
        (name = "todos", description = "Personal to-do lists"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
