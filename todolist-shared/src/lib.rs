//! # Todolist Shared Library
//!
//! Domain types, persistence contracts, and use cases for the todolist
//! backend. The HTTP server in `todolist-api` depends on this crate.
//!
//! ## Module Organization
//!
//! - `models`: Domain entities (`Todo`, `User`)
//! - `repositories`: Repository traits plus PostgreSQL and in-memory adapters
//! - `usecases`: One type per business operation
//! - `auth`: Shared-secret token exchange and bearer verification
//! - `db`: Connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod repositories;
pub mod usecases;

/// Current version of the todolist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
