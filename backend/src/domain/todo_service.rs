//! Personal to-do lists.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{TodoCommand, TodoRepository};
use crate::domain::store_errors::map_store_error;
use crate::domain::{Error, Todo, TodoId};

const TODO_NOT_FOUND: &str = "Todo not found";

/// To-do service implementing [`TodoCommand`].
pub struct TodoService<D> {
    todos: Arc<D>,
    clock: Arc<dyn Clock>,
}

impl<D> TodoService<D> {
    /// Create the service.
    pub fn new(todos: Arc<D>, clock: Arc<dyn Clock>) -> Self {
        Self { todos, clock }
    }
}

impl<D> TodoService<D>
where
    D: TodoRepository,
{
    // Foreign items are reported as missing.
    async fn owned(&self, email: &str, id: &TodoId) -> Result<Todo, Error> {
        self.todos
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .filter(|todo| todo.employee_email == email)
            .ok_or_else(|| Error::not_found(TODO_NOT_FOUND))
    }
}

#[async_trait]
impl<D> TodoCommand for TodoService<D>
where
    D: TodoRepository,
{
    async fn list_todos(&self, email: &str) -> Result<Vec<Todo>, Error> {
        let mut todos = self
            .todos
            .list_for_email(email)
            .await
            .map_err(map_store_error)?;
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn add_todo(&self, email: &str, text: String) -> Result<Todo, Error> {
        let todo = Todo::new(email, text, self.clock.utc());
        self.todos.upsert(&todo).await.map_err(map_store_error)?;
        Ok(todo)
    }

    async fn toggle_todo(&self, email: &str, id: TodoId) -> Result<Todo, Error> {
        let toggled = self.owned(email, &id).await?.toggled();
        self.todos.upsert(&toggled).await.map_err(map_store_error)?;
        Ok(toggled)
    }

    async fn delete_todo(&self, email: &str, id: TodoId) -> Result<(), Error> {
        self.owned(email, &id).await?;
        if self.todos.delete(&id).await.map_err(map_store_error)? {
            Ok(())
        } else {
            Err(Error::not_found(TODO_NOT_FOUND))
        }
    }
}
