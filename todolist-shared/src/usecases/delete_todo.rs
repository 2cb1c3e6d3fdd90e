use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{todo_write_error, UseCaseError, UseCaseResult};
use crate::repositories::TodoRepository;

/// Deletes an existing todo
///
/// Not idempotent: deleting the same ID twice yields `NotFound` the second
/// time.
pub struct DeleteTodo {
    todos: Arc<dyn TodoRepository>,
}

impl DeleteTodo {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    pub async fn execute(&self, id: Uuid) -> UseCaseResult<()> {
        if self.todos.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::NotFound("Todo"));
        }

        self.todos.delete(id).await.map_err(todo_write_error)?;
        info!(todo_id = %id, "Deleted todo");

        Ok(())
    }
}
