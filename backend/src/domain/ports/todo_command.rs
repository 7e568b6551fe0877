//! Driving port for personal to-do lists.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// To-do use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Items owned by `email`, newest first.
    async fn list_todos(&self, email: &str) -> Result<Vec<Todo>, Error>;

    /// Add an open item.
    async fn add_todo(&self, email: &str, text: String) -> Result<Todo, Error>;

    /// Flip the done flag of an owned item.
    async fn toggle_todo(&self, email: &str, id: TodoId) -> Result<Todo, Error>;

    /// Delete an owned item.
    async fn delete_todo(&self, email: &str, id: TodoId) -> Result<(), Error>;
}
