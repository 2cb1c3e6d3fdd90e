/// In-memory repositories
///
/// Process-local implementations of the repository traits. They keep rows in
/// insertion order, reject duplicate primary keys the way the database does,
/// and count every call so tests can assert that a request never reached
/// persistence.
///
/// Data does not survive a restart.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{RepositoryError, RepositoryResult, TodoRepository, UserRepository};
use crate::models::{Todo, User};

/// In-memory todo repository
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    rows: RwLock<Vec<Todo>>,
    calls: AtomicUsize,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait method calls served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of all stored todos
    pub async fn all(&self) -> Vec<Todo> {
        self.rows.read().await.clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> RepositoryResult<()> {
        self.record_call();
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == todo.id) {
            return Err(RepositoryError::Constraint("todos_pkey".to_string()));
        }
        rows.push(todo.clone());
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> RepositoryResult<()> {
        self.record_call();
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == todo.id)
            .ok_or_else(|| RepositoryError::Missing(format!("todo {}", todo.id)))?;

        row.description = todo.description.clone();
        row.status = todo.status;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.record_call();
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(RepositoryError::Missing(format!("todo {}", id)));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>> {
        self.record_call();
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Todo>> {
        self.record_call();
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait method calls served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of all stored users
    pub async fn all(&self) -> Vec<User> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }

    async fn create(&self, user: &User) -> RepositoryResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == user.id) {
            return Err(RepositoryError::Constraint("users_pkey".to_string()));
        }
        rows.push(user.clone());
        Ok(())
    }
}
