/// Todo model
///
/// A `Todo` is a single to-do item owned by exactly one user (via `user_id`).
/// Todos are created by the create use case, mutated only through a partial
/// merge in the update use case, and removed by the delete use case.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE todo_status AS ENUM ('pending', 'progress', 'done');
///
/// CREATE TABLE todos (
///     id UUID PRIMARY KEY,
///     description TEXT NOT NULL,
///     status todo_status NOT NULL DEFAULT 'pending',
///     user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # JSON
///
/// Todos serialize with camelCase keys:
///
/// ```json
/// {
///   "id": "11111111-1111-1111-1111-111111111111",
///   "description": "buy milk",
///   "status": "pending",
///   "userId": "u1"
/// }
/// ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Progress of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "todo_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// Not started yet
    Pending,

    /// Being worked on
    Progress,

    /// Finished
    Done,
}

impl TodoStatus {
    /// Converts status to its wire/database string
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Progress => "progress",
            TodoStatus::Done => "done",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status '{0}', expected one of: pending, progress, done")]
pub struct ParseTodoStatusError(pub String);

impl FromStr for TodoStatus {
    type Err = ParseTodoStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TodoStatus::Pending),
            "progress" => Ok(TodoStatus::Progress),
            "done" => Ok(TodoStatus::Done),
            other => Err(ParseTodoStatusError(other.to_string())),
        }
    }
}

/// Todo entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Caller-supplied todo ID
    pub id: Uuid,

    /// Free-form description
    pub description: String,

    /// Current status
    pub status: TodoStatus,

    /// Owning user ID
    pub user_id: String,
}

/// Partial update for a todo
///
/// `None` means "keep the existing value". There is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TodoStatus>,
}

impl Todo {
    /// Merges a partial update into this todo
    ///
    /// Fields present in `update` replace the current ones; absent fields are
    /// retained. The ID and owner never change.
    pub fn merge(self, update: UpdateTodo) -> Todo {
        Todo {
            description: update.description.unwrap_or(self.description),
            status: update.status.unwrap_or(self.status),
            ..self
        }
    }
}
