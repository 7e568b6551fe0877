//! Task assignment and status transitions.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::directory::IdentityDirectory;
use crate::domain::ports::{
    AssignedTask, EmployeeRepository, TaskActor, TaskRepository, TaskWorkflow,
    UpdateTaskStatusRequest,
};
use crate::domain::revision::ensure_expected_revision;
use crate::domain::store_errors::map_store_error;
use crate::domain::{Error, Task, TaskDraft};

/// Task workflow service.
pub struct TaskService<T, E> {
    tasks: Arc<T>,
    directory: IdentityDirectory<E>,
    clock: Arc<dyn Clock>,
}

impl<T, E> TaskService<T, E> {
    /// Create the service.
    pub fn new(tasks: Arc<T>, directory: IdentityDirectory<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks,
            directory,
            clock,
        }
    }
}

impl<T, E> TaskService<T, E>
where
    T: TaskRepository,
    E: EmployeeRepository,
{
    async fn authorise(&self, task: &Task, actor: &TaskActor) -> Result<(), Error> {
        match actor {
            TaskActor::Manager => Ok(()),
            TaskActor::Employee { email } => {
                let employee = self.directory.employee_by_email(email).await?;
                if employee.id == task.employee_id {
                    Ok(())
                } else {
                    Err(Error::forbidden("Task is not assigned to this employee"))
                }
            }
        }
    }
}

#[async_trait]
impl<T, E> TaskWorkflow for TaskService<T, E>
where
    T: TaskRepository,
    E: EmployeeRepository,
{
    async fn assign_task(&self, draft: TaskDraft) -> Result<AssignedTask, Error> {
        let employee = self.directory.employee(&draft.employee_id).await?;
        let task = Task::assign(draft, self.clock.utc());
        self.tasks.save(&task, None).await.map_err(map_store_error)?;
        info!(task_id = %task.id, employee_id = %employee.id, "task assigned");
        Ok(AssignedTask {
            task,
            employee_name: employee.name,
        })
    }

    async fn update_task_status(&self, request: UpdateTaskStatusRequest) -> Result<Task, Error> {
        let current = self
            .tasks
            .find_by_id(&request.task_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Task not found"))?;
        self.authorise(&current, &request.actor).await?;
        ensure_expected_revision(request.expected_revision, current.revision)?;

        let next = current.with_status(request.status, self.clock.utc());
        self.tasks
            .save(&next, Some(current.revision))
            .await
            .map_err(map_store_error)?;
        info!(
            task_id = %next.id,
            status = %next.status,
            revision = next.revision,
            "task status updated"
        );
        Ok(next)
    }

    async fn tasks_for_employee(&self, email: &str) -> Result<Vec<Task>, Error> {
        let employee = self.directory.employee_by_email(email).await?;
        let mut tasks = self
            .tasks
            .list_for_employee(&employee.id)
            .await
            .map_err(map_store_error)?;
        tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        Ok(tasks)
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
