/// Persistence contracts for todos and users
///
/// Use cases depend only on the traits defined here. Two adapters ship with
/// the crate:
///
/// - [`postgres`]: `sqlx`-backed repositories for production
/// - [`memory`]: in-process repositories for tests and database-less runs
///
/// Repositories are shared across request handlers as
/// `Arc<dyn TodoRepository>` / `Arc<dyn UserRepository>`, so implementations
/// must be `Send + Sync`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todolist_shared::repositories::{memory::InMemoryTodoRepository, TodoRepository};
///
/// let todos: Arc<dyn TodoRepository> = Arc::new(InMemoryTodoRepository::new());
/// ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Todo, User};

pub mod memory;
pub mod postgres;

/// Repository error type
///
/// Adapters collapse store-specific failures into these variants. None of
/// them carries enough structure for callers to recover; they are surfaced as
/// internal errors at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// A uniqueness or foreign key constraint rejected the write
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A write targeted a row that no longer exists
    #[error("Row not found: {0}")]
    Missing(String),

    /// Any other query failure
    #[error("Query error: {0}")]
    Query(String),
}

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence operations for todos
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new todo
    ///
    /// Duplicate IDs are rejected by the store, not checked here.
    async fn create(&self, todo: &Todo) -> RepositoryResult<()>;

    /// Overwrites description and status of an existing todo
    async fn update(&self, todo: &Todo) -> RepositoryResult<()>;

    /// Deletes a todo by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Finds a todo by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>>;

    /// Lists every todo owned by `user_id`, in store order
    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Todo>>;
}

/// Persistence operations for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;

    /// Inserts a new user
    async fn create(&self, user: &User) -> RepositoryResult<()>;
}
