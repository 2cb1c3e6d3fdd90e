/// PostgreSQL repositories
///
/// `sqlx`-backed implementations of [`TodoRepository`] and
/// [`UserRepository`]. Both hold a clone of the shared [`PgPool`].
///
/// Queries are checked at runtime (`query_as` + `FromRow`), so the crate
/// builds without a live database.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
/// use todolist_shared::repositories::{postgres::PgTodoRepository, TodoRepository};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let todos = PgTodoRepository::new(pool);
/// let mine = todos.find_by_user_id("u1").await?;
/// println!("{} todos", mine.len());
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{RepositoryError, RepositoryResult, TodoRepository, UserRepository};
use crate::models::{Todo, User};

/// Maps sqlx errors to repository errors
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::Missing("row not found".to_string()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return RepositoryError::Constraint(constraint.to_string());
            }
            RepositoryError::Query(db_err.to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            RepositoryError::Connection(err.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, todo: &Todo) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, description, status, user_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(todo.id)
        .bind(&todo.description)
        .bind(todo.status)
        .bind(&todo.user_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(todo_id = %todo.id, user_id = %todo.user_id, "Inserted todo");
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET description = $2, status = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(todo.id)
        .bind(&todo.description)
        .bind(todo.status)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Missing(format!("todo {}", todo.id)));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Missing(format!("todo {}", id)));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, description, status, user_id
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_user_id(&self, user_id: &str) -> RepositoryResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, description, status, user_id
            FROM todos
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, id_tenant
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn create(&self, user: &User) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, id_tenant)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.id_tenant)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(user_id = %user.id, tenant = %user.id_tenant, "Inserted user");
        Ok(())
    }
}
