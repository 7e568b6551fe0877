//! Assigned tasks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::revision::INITIAL_REVISION;
use crate::domain::{EmployeeId, TaskId, TaskStatus};

/// Fields a manager supplies when assigning work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Assignee.
    pub employee_id: EmployeeId,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Due time.
    pub deadline: DateTime<Utc>,
}

/// A unit of work assigned to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier.
    pub id: TaskId,
    /// Assignee.
    pub employee_id: EmployeeId,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Due time.
    pub deadline: DateTime<Utc>,
    /// Current progress.
    pub status: TaskStatus,
    /// Assignment time.
    pub created_at: DateTime<Utc>,
    /// Last transition time.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub revision: u32,
}

impl Task {
    /// Create a pending task from a draft.
    #[must_use]
    pub fn assign(draft: TaskDraft, now: DateTime<Utc>) -> Self {
        let TaskDraft {
            employee_id,
            title,
            description,
            deadline,
        } = draft;
        Self {
            id: TaskId::random(),
            employee_id,
            title,
            description,
            deadline,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
            revision: INITIAL_REVISION,
        }
    }

    /// Copy with a new status and the next revision.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at: now,
            revision: self.revision + 1,
            ..self.clone()
        }
    }
}
