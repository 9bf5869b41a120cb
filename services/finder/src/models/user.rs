//! User model

use serde::Serialize;
use sqlx::FromRow;

/// Registered user. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users
    pub enrollment: String,
}
