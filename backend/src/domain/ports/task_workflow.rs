//! Driving port for task assignment and status transitions.

use async_trait::async_trait;

use crate::domain::{Error, Task, TaskDraft, TaskId, TaskStatus};

/// Who is moving a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskActor {
    /// Any manager may move any task.
    Manager,
    /// Employees may only move their own tasks.
    Employee {
        /// Verified email of the acting employee.
        email: String,
    },
}

/// Request to transition a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    /// Target task.
    pub task_id: TaskId,
    /// New status.
    pub status: TaskStatus,
    /// Revision the caller last read, when pinned.
    pub expected_revision: Option<u32>,
    /// Acting identity.
    pub actor: TaskActor,
}

/// A newly assigned task with the assignee's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedTask {
    /// Stored task.
    pub task: Task,
    /// Assignee name.
    pub employee_name: String,
}

/// Task use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskWorkflow: Send + Sync {
    /// Assign a pending task to an existing employee.
    async fn assign_task(&self, draft: TaskDraft) -> Result<AssignedTask, Error>;

    /// Move a task to a new status.
    async fn update_task_status(&self, request: UpdateTaskStatusRequest) -> Result<Task, Error>;

    /// Tasks assigned to the employee registered under `email`.
    async fn tasks_for_employee(&self, email: &str) -> Result<Vec<Task>, Error>;
}
