/// User model
///
/// Users own todos and belong to a tenant (`id_tenant`). The tenant is an
/// organizational label only; it is not enforced as an isolation boundary.
///
/// Users are never created directly. The create-todo use case provisions the
/// user record the first time a todo references it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id TEXT PRIMARY KEY,
///     name TEXT NOT NULL,
///     email TEXT NOT NULL,
///     id_tenant TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use serde::{Deserialize, Serialize};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Caller-supplied user ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address (format is checked at the HTTP boundary)
    pub email: String,

    /// Tenant this user belongs to
    pub id_tenant: String,
}
