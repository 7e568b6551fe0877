//! Manager-to-employee team membership.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{EmployeeId, ManagerId, Task};

/// A manager's claim on an employee. The pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    /// Claiming manager.
    pub manager_id: ManagerId,
    /// Claimed employee.
    pub employee_id: EmployeeId,
    /// Claim time.
    pub added_at: DateTime<Utc>,
}

/// Team member row with directory data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Employee.
    pub employee_id: EmployeeId,
    /// Name, when the employee still resolves.
    pub name: Option<String>,
    /// Email, when the employee still resolves.
    pub email: Option<String>,
    /// Claim time.
    pub added_at: DateTime<Utc>,
}

/// Employee together with every task assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWorkload {
    /// Employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Assigned tasks, earliest deadline first.
    pub tasks: Vec<Task>,
}
