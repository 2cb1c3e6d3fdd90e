use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{todo_write_error, UseCaseError, UseCaseResult};
use crate::models::{self, TodoStatus};
use crate::repositories::TodoRepository;

/// Input for [`UpdateTodo`]
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    /// Todo to update
    pub id: Uuid,

    /// Replacement description, if any
    pub description: Option<String>,

    /// Replacement status, if any
    pub status: Option<TodoStatus>,
}

/// Applies a partial update to an existing todo
pub struct UpdateTodo {
    todos: Arc<dyn TodoRepository>,
}

impl UpdateTodo {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound("Todo")` when no todo has `input.id`.
    pub async fn execute(&self, input: UpdateTodoInput) -> UseCaseResult<()> {
        let existing = self
            .todos
            .find_by_id(input.id)
            .await?
            .ok_or(UseCaseError::NotFound("Todo"))?;

        let merged = existing.merge(models::UpdateTodo {
            description: input.description,
            status: input.status,
        });

        self.todos.update(&merged).await.map_err(todo_write_error)?;
        info!(todo_id = %merged.id, status = %merged.status, "Updated todo");

        Ok(())
    }
}
