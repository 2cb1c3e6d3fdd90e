use std::sync::Arc;
use tracing::{debug, info};

use super::UseCaseResult;
use crate::models::{Todo, User};
use crate::repositories::{TodoRepository, UserRepository};

/// Creates a todo, provisioning its user first when needed
///
/// The user lookup and the todo insert are separate statements. If the insert
/// fails after the user was provisioned, the user row stays.
pub struct CreateTodo {
    todos: Arc<dyn TodoRepository>,
    users: Arc<dyn UserRepository>,
}

impl CreateTodo {
    pub fn new(todos: Arc<dyn TodoRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { todos, users }
    }

    pub async fn execute(&self, todo: Todo, user: User) -> UseCaseResult<()> {
        if self.users.find_by_id(&user.id).await?.is_none() {
            self.users.create(&user).await?;
            info!(user_id = %user.id, tenant = %user.id_tenant, "Provisioned user");
        } else {
            debug!(user_id = %user.id, "User already exists");
        }

        self.todos.create(&todo).await?;
        info!(todo_id = %todo.id, user_id = %todo.user_id, "Created todo");

        Ok(())
    }
}
