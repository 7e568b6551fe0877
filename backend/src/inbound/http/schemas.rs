//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape so response DTOs can reference them
//! with `#[schema(value_type = ...)]`.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa code generation"
)]

use utoipa::ToSchema;

/// Machine-readable error code.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
#[schema(rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// Malformed or invalid request.
    InvalidRequest,
    /// No verified identity, or credentials did not match.
    Unauthorized,
    /// The caller may not perform this action.
    Forbidden,
    /// The referenced record does not exist.
    NotFound,
    /// Duplicate key or stale revision.
    Conflict,
    /// The Entity Store is unreachable.
    ServiceUnavailable,
    /// Unexpected failure; the message is redacted.
    InternalError,
}

/// Error envelope returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message.
    #[schema(example = "Task not found")]
    error: String,
    /// Stable machine-readable code.
    code: ErrorCodeSchema,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f0a3b3e-8d7b-4f8e-9a43-55b9b4f4b2f1")]
    trace_id: Option<String>,
    /// Field-level context for validation and conflict errors.
    details: Option<serde_json::Value>,
}

/// Employee profile without credential material.
#[derive(ToSchema)]
#[schema(as = EmployeeProfile)]
#[schema(rename_all = "camelCase")]
pub struct EmployeeProfileSchema {
    #[schema(format = Uuid)]
    id: String,
    name: String,
    #[schema(example = "ana@corp.test")]
    email: String,
    phone: Option<String>,
    address: Option<String>,
    department: Option<String>,
}

/// Assigned task.
#[derive(ToSchema)]
#[schema(as = Task)]
#[schema(rename_all = "camelCase")]
pub struct TaskSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    employee_id: String,
    title: String,
    description: String,
    #[schema(format = DateTime)]
    deadline: String,
    #[schema(example = "Pending")]
    status: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    #[schema(example = 1)]
    revision: u32,
}

/// Leave request.
#[derive(ToSchema)]
#[schema(as = LeaveRequest)]
#[schema(rename_all = "camelCase")]
pub struct LeaveRequestSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    employee_id: Option<String>,
    email: String,
    #[schema(format = Date)]
    start_date: String,
    #[schema(format = Date)]
    end_date: String,
    reason: String,
    #[schema(example = "Pending")]
    status: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    revision: u32,
}

/// Work report.
#[derive(ToSchema)]
#[schema(as = WorkReport)]
#[schema(rename_all = "camelCase")]
pub struct WorkReportSchema {
    #[schema(format = Uuid)]
    id: String,
    employee_email: String,
    #[schema(format = Date)]
    start_date: String,
    #[schema(format = Date)]
    end_date: String,
    total_hours: f64,
    report_name: String,
    description: String,
    #[schema(example = "Approved")]
    status: String,
    manager_comment: String,
    #[schema(format = DateTime)]
    submitted_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    revision: u32,
}

/// Performance review.
#[derive(ToSchema)]
#[schema(as = Review)]
#[schema(rename_all = "camelCase")]
pub struct ReviewSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    employee_id: String,
    review_text: String,
    rating: f64,
    tasks_completed: u32,
    average_rating: Option<f64>,
    remarks: Option<String>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    revision: u32,
}

/// To-do item.
#[derive(ToSchema)]
#[schema(as = Todo)]
#[schema(rename_all = "camelCase")]
pub struct TodoSchema {
    #[schema(format = Uuid)]
    id: String,
    employee_email: String,
    text: String,
    completed: bool,
    #[schema(format = DateTime)]
    created_at: String,
}

/// Present/absent counts for the current month.
#[derive(ToSchema)]
#[schema(as = AttendanceSummary)]
pub struct AttendanceSummarySchema {
    present: u32,
    absent: u32,
    total: u32,
}
