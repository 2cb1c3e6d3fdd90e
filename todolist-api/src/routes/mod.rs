/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Access token issuance
/// - `todos`: Todo CRUD (bearer token required)

pub mod auth;
pub mod health;
pub mod todos;
