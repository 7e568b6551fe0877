//! PostgreSQL-backed `TodoRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, TodoRepository};
use crate::domain::{Todo, TodoId};
use crate::query_optional;
use crate::query_vec;

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::TodoRow;
use super::pool::DbPool;
use super::schema::todos;

/// Diesel-backed implementation of [`TodoRepository`].
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "row converters share the fallible signature expected by the query macros"
)]
fn row_to_todo(row: TodoRow) -> Result<Todo, String> {
    Ok(Todo {
        id: TodoId::from_uuid(row.id),
        employee_email: row.employee_email,
        text: row.text,
        completed: row.completed,
        created_at: row.created_at,
    })
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list_for_email(&self, email: &str) -> Result<Vec<Todo>, EntityStoreError> {
        query_vec!(
            self,
            todos::table,
            todos::employee_email.eq(email),
            todos::created_at.desc(),
            TodoRow,
            row_to_todo
        )
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, EntityStoreError> {
        query_optional!(self, todos::table, todos::id.eq(id.as_uuid()), TodoRow, row_to_todo)
    }

    async fn upsert(&self, todo: &Todo) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = TodoRow {
            id: *todo.id.as_uuid(),
            employee_email: todo.employee_email.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
            created_at: todo.created_at,
        };
        diesel::insert_into(todos::table)
            .values(&row)
            .on_conflict(todos::id)
            .do_update()
            .set(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(todos::table.filter(todos::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
