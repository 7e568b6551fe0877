//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    attendance_sheets, employees, leave_requests, managers, reviews, tasks, team_memberships,
    todos, work_reports,
};

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// Row struct for the employees table, used for reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Changeset for profile edits. `None` columns are written as NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct EmployeeProfileUpdate<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub department: Option<&'a str>,
}

/// Row struct for the managers table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = managers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ManagerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Row struct for the team_memberships table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = team_memberships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TeamMembershipRow {
    pub manager_id: Uuid,
    pub employee_id: Uuid,
    pub added_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Workflow records
// ---------------------------------------------------------------------------

/// Row struct for the tasks table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Changeset for task status transitions.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub(crate) struct TaskStatusUpdate<'a> {
    pub status: &'a str,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Row struct for the leave_requests table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = leave_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LeaveRow {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub employee_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Changeset for leave decisions.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = leave_requests)]
pub(crate) struct LeaveStatusUpdate<'a> {
    pub status: &'a str,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Row struct for the work_reports table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = work_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WorkReportRow {
    pub id: Uuid,
    pub employee_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: f64,
    pub report_name: String,
    pub description: String,
    pub status: String,
    pub manager_comment: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Changeset for work report decisions.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = work_reports)]
pub(crate) struct WorkReportReviewUpdate<'a> {
    pub status: &'a str,
    pub manager_comment: &'a str,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Row struct for the reviews table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub review_text: String,
    pub rating: f64,
    pub tasks_completed: i32,
    pub average_rating: Option<f64>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

/// Changeset for review amendments.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reviews)]
pub(crate) struct ReviewAmendmentUpdate<'a> {
    pub tasks_completed: i32,
    pub average_rating: Option<f64>,
    pub remarks: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
    pub revision: i32,
}

// ---------------------------------------------------------------------------
// Attendance and todos
// ---------------------------------------------------------------------------

/// Row struct for the attendance_sheets table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = attendance_sheets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AttendanceSheetRow {
    pub employee_id: Uuid,
    pub month: String,
    pub records: serde_json::Value,
}

/// Row struct for the todos table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: Uuid,
    pub employee_email: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
