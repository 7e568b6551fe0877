//! Personal to-do items.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::TodoId;

/// A checklist entry owned by one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Identifier.
    pub id: TodoId,
    /// Owner email.
    pub employee_email: String,
    /// Item text.
    pub text: String,
    /// Done flag.
    pub completed: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// New open item.
    #[must_use]
    pub fn new(employee_email: impl Into<String>, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::random(),
            employee_email: employee_email.into(),
            text: text.into(),
            completed: false,
            created_at: now,
        }
    }

    /// Copy with the done flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
