//! Port for to-do item storage.

use async_trait::async_trait;

use crate::domain::{Todo, TodoId};

use super::EntityStoreError;

/// Storage for to-do items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Items owned by an email, in any order.
    async fn list_for_email(&self, email: &str) -> Result<Vec<Todo>, EntityStoreError>;

    /// Fetch an item by identifier.
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, EntityStoreError>;

    /// Insert or overwrite an item.
    async fn upsert(&self, todo: &Todo) -> Result<(), EntityStoreError>;

    /// Remove an item; `Ok(false)` when it did not exist.
    async fn delete(&self, id: &TodoId) -> Result<bool, EntityStoreError>;
}
