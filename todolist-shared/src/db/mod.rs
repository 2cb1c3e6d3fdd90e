/// Database layer for todolist
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `migrations`: Embedded schema migrations
///
/// Repository adapters over the pool live in [`crate::repositories::postgres`].

pub mod migrations;
pub mod pool;
