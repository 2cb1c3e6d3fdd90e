use std::sync::Arc;
use tracing::debug;

use super::UseCaseResult;
use crate::models::Todo;
use crate::repositories::TodoRepository;

/// Lists the todos owned by a user
pub struct GetTodos {
    todos: Arc<dyn TodoRepository>,
}

impl GetTodos {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    /// Returns an empty vector when the user has no todos
    pub async fn execute(&self, user_id: &str) -> UseCaseResult<Vec<Todo>> {
        let todos = self.todos.find_by_user_id(user_id).await?;
        debug!(user_id, count = todos.len(), "Fetched todos");
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoStatus;
    use crate::repositories::memory::InMemoryTodoRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_filters_by_owner() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        for (owner, description) in [("u1", "a"), ("u2", "b"), ("u1", "c")] {
            repo.create(&Todo {
                id: Uuid::new_v4(),
                description: description.to_string(),
                status: TodoStatus::Pending,
                user_id: owner.to_string(),
            })
            .await
            .unwrap();
        }

        let usecase = GetTodos::new(repo);
        let found = usecase.execute("u1").await.unwrap();

        let descriptions: Vec<_> = found.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["a", "c"]);
        assert!(usecase.execute("u3").await.unwrap().is_empty());
    }
}
