/// Application use cases
///
/// One type per business operation. Each holds the repository handles it
/// needs and exposes a single `execute` method:
///
/// - [`CreateTodo`]: provision the owner if missing, then insert the todo
/// - [`GetTodos`]: list a user's todos
/// - [`UpdateTodo`]: partial merge of description/status
/// - [`DeleteTodo`]: delete an existing todo
///
/// [`TodoUseCases`] wires all four over one pair of repositories. It is
/// built once at startup and shared by the HTTP layer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todolist_shared::repositories::memory::{InMemoryTodoRepository, InMemoryUserRepository};
/// use todolist_shared::usecases::TodoUseCases;
///
/// # async fn example() -> Result<(), todolist_shared::usecases::UseCaseError> {
/// let usecases = TodoUseCases::new(
///     Arc::new(InMemoryTodoRepository::new()),
///     Arc::new(InMemoryUserRepository::new()),
/// );
///
/// let todos = usecases.get_todos.execute("u1").await?;
/// assert!(todos.is_empty());
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;

use crate::repositories::{RepositoryError, TodoRepository, UserRepository};

mod create_todo;
mod delete_todo;
mod get_todos;
mod update_todo;

pub use create_todo::CreateTodo;
pub use delete_todo::DeleteTodo;
pub use get_todos::GetTodos;
pub use update_todo::{UpdateTodo, UpdateTodoInput};

/// Use case error type
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// Referenced entity does not exist (payload names the entity kind)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Persistence failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case result type alias
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Maps a write against a vanished todo to `NotFound`
///
/// The row can disappear between the existence check and the write when
/// another request deletes it concurrently.
fn todo_write_error(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::Missing(_) => UseCaseError::NotFound("Todo"),
        other => UseCaseError::Repository(other),
    }
}

/// All todo use cases over a shared pair of repositories
#[derive(Clone)]
pub struct TodoUseCases {
    /// Create a todo (and its owner)
    pub create_todo: Arc<CreateTodo>,

    /// List todos by owner
    pub get_todos: Arc<GetTodos>,

    /// Partially update a todo
    pub update_todo: Arc<UpdateTodo>,

    /// Delete a todo
    pub delete_todo: Arc<DeleteTodo>,
}

impl TodoUseCases {
    /// Builds every use case over the given repositories
    pub fn new(todos: Arc<dyn TodoRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            create_todo: Arc::new(CreateTodo::new(todos.clone(), users)),
            get_todos: Arc::new(GetTodos::new(todos.clone())),
            update_todo: Arc::new(UpdateTodo::new(todos.clone())),
            delete_todo: Arc::new(DeleteTodo::new(todos)),
        }
    }
}
