/// Domain models for todolist
///
/// Plain data records with no persistence logic. Storage lives behind the
/// traits in [`crate::repositories`].
///
/// # Models
///
/// - `todo`: Todo items and their status
/// - `user`: Todo owners

pub mod todo;
pub mod user;

pub use todo::{ParseTodoStatusError, Todo, TodoStatus, UpdateTodo};
pub use user::User;
