//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed HR records, their status lifecycles
//! and the services that enforce who may create or transition them.
//! Services depend only on the traits in [`ports`]; adapters live under
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Records: Employee, Manager, Task, LeaveRequest, WorkReport, Review,
//!   AttendanceSheet, TeamMembership, Todo.
//! - Services: one per driving port, plus the [`IdentityDirectory`] used
//!   for enrichment.

pub mod attendance;
pub mod auth;
pub mod directory;
pub mod error;
pub mod ids;
pub mod leave;
pub mod people;
pub mod ports;
pub mod review;
pub mod revision;
pub mod status;
pub mod task;
pub mod team;
pub mod todo;
pub mod trace_id;
pub mod work_report;

mod account_service;
mod attendance_service;
mod leave_service;
mod review_service;
mod store_errors;
mod task_service;
mod team_service;
mod todo_service;
mod work_report_service;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::account_service::AccountService;
pub use self::attendance::{
    AttendanceRecord, AttendanceSheet, AttendanceStatus, AttendanceSummary, MonthKey,
    MonthKeyError,
};
pub use self::attendance_service::AttendanceService;
pub use self::auth::{
    ContactDetails, CredentialValidationError, LoginCredentials, PasswordHash, Registration, Role,
};
pub use self::directory::IdentityDirectory;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{
    EmployeeId, IdParseError, LeaveId, ManagerId, ReportId, ReviewId, TaskId, TodoId,
};
pub use self::leave::{LeaveDraft, LeaveRequest};
pub use self::leave_service::LeaveService;
pub use self::people::{
    AuthenticatedUser, ContactCard, Employee, EmployeeProfile, Manager, ProfileUpdate,
};
pub use self::review::{Review, ReviewAmendment, ReviewDraft, ReviewRollup};
pub use self::review_service::ReviewService;
pub use self::status::{LeaveStatus, ReportStatus, StatusParseError, TaskStatus};
pub use self::task::{Task, TaskDraft};
pub use self::task_service::TaskService;
pub use self::team::{EmployeeWorkload, TeamMember, TeamMembership};
pub use self::team_service::TeamService;
pub use self::todo::Todo;
pub use self::todo_service::TodoService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::work_report::{WorkReport, WorkReportDraft, WorkReportValidationError};
pub use self::work_report_service::WorkReportService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hr_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
