//! # Todolist API Server Library
//!
//! HTTP surface for the todolist backend: token issuance plus todo CRUD,
//! built on the use cases in `todolist-shared`.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Validating JSON extractor
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
