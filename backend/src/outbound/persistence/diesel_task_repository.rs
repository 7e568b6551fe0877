//! PostgreSQL-backed `TaskRepository` with revision-checked status writes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, TaskRepository};
use crate::domain::{EmployeeId, Task, TaskId};
use crate::query_and_disambiguate;
use crate::query_optional;
use crate::query_vec;
use crate::save_with_revision;

use super::diesel_helpers::{HasRevision, cast_revision, cast_revision_for_db};
use super::models::{TaskRow, TaskStatusUpdate};
use super::pool::DbPool;
use super::schema::tasks;

/// Diesel-backed implementation of [`TaskRepository`].
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_task(row: TaskRow) -> Result<Task, String> {
    Ok(Task {
        id: TaskId::from_uuid(row.id),
        employee_id: EmployeeId::from_uuid(row.employee_id),
        title: row.title,
        description: row.description,
        deadline: row.deadline,
        status: row.status.parse().map_err(|err| format!("{err}"))?,
        created_at: row.created_at,
        updated_at: row.updated_at,
        revision: cast_revision(row.revision),
    })
}

impl HasRevision for TaskRow {
    fn revision(&self) -> u32 {
        cast_revision(self.revision)
    }
}

async fn handle_task_update_failure<C>(
    conn: &mut C,
    task_id: uuid::Uuid,
    expected_revision: u32,
) -> EntityStoreError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    query_and_disambiguate!(
        conn,
        tasks::table,
        tasks::id.eq(task_id),
        TaskRow,
        expected_revision,
        "Task"
    )
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, EntityStoreError> {
        query_optional!(self, tasks::table, tasks::id.eq(id.as_uuid()), TaskRow, row_to_task)
    }

    async fn list_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Task>, EntityStoreError> {
        query_vec!(
            self,
            tasks::table,
            tasks::employee_id.eq(employee_id.as_uuid()),
            tasks::deadline.asc(),
            TaskRow,
            row_to_task
        )
    }

    async fn save(
        &self,
        task: &Task,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let task_id = *task.id.as_uuid();
        save_with_revision!(
            self,
            expected_revision,
            insert: {
                table: tasks::table,
                new_row: TaskRow {
                    id: task_id,
                    employee_id: *task.employee_id.as_uuid(),
                    title: task.title.clone(),
                    description: task.description.clone(),
                    deadline: task.deadline,
                    status: task.status.as_str().to_owned(),
                    created_at: task.created_at,
                    updated_at: task.updated_at,
                    revision: cast_revision_for_db(task.revision),
                }
            },
            update(expected): {
                table: tasks::table,
                filter: tasks::id
                    .eq(task_id)
                    .and(tasks::revision.eq(cast_revision_for_db(expected))),
                changeset: TaskStatusUpdate {
                    status: task.status.as_str(),
                    updated_at: task.updated_at,
                    revision: cast_revision_for_db(task.revision),
                },
                on_zero_rows: |conn, expected| handle_task_update_failure(conn, task_id, expected)
            }
        )
    }
}
