//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`CredentialHasher`]) are implemented by
//! outbound adapters. Driving ports (`*Command`, `*Query`, `*Workflow`) are
//! implemented by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod accounts_command;
mod attendance_query;
mod attendance_repository;
mod credential_hasher;
mod entity_store_error;
mod leave_repository;
mod leave_workflow;
mod people_repository;
mod review_repository;
mod review_workflow;
mod task_repository;
mod task_workflow;
mod team_command;
mod team_repository;
mod todo_command;
mod todo_repository;
mod work_report_repository;
mod work_report_workflow;

pub use accounts_command::AccountsCommand;
#[cfg(test)]
pub use accounts_command::MockAccountsCommand;
#[cfg(test)]
pub use attendance_query::MockAttendanceQuery;
pub use attendance_query::{AttendanceOverview, AttendanceQuery};
pub use attendance_repository::AttendanceRepository;
#[cfg(test)]
pub use attendance_repository::MockAttendanceRepository;
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
pub use entity_store_error::EntityStoreError;
pub use leave_repository::LeaveRepository;
#[cfg(test)]
pub use leave_repository::MockLeaveRepository;
#[cfg(test)]
pub use leave_workflow::MockLeaveWorkflow;
pub use leave_workflow::{EnrichedLeave, LeaveWorkflow, UpdateLeaveStatusRequest};
pub use people_repository::{EmployeeRepository, ManagerRepository};
#[cfg(test)]
pub use people_repository::{MockEmployeeRepository, MockManagerRepository};
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::ReviewRepository;
#[cfg(test)]
pub use review_workflow::MockReviewWorkflow;
pub use review_workflow::{EnrichedReview, ReviewWorkflow, UpdateReviewRequest};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::TaskRepository;
#[cfg(test)]
pub use task_workflow::MockTaskWorkflow;
pub use task_workflow::{AssignedTask, TaskActor, TaskWorkflow, UpdateTaskStatusRequest};
#[cfg(test)]
pub use team_command::MockTeamCommand;
pub use team_command::TeamCommand;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
pub use team_repository::TeamRepository;
#[cfg(test)]
pub use todo_command::MockTodoCommand;
pub use todo_command::TodoCommand;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::TodoRepository;
#[cfg(test)]
pub use work_report_repository::MockWorkReportRepository;
pub use work_report_repository::WorkReportRepository;
#[cfg(test)]
pub use work_report_workflow::MockWorkReportWorkflow;
pub use work_report_workflow::{UpdateReportStatusRequest, WorkReportWorkflow};
