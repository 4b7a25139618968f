//! Data models for the fintrack backend

use sqlx::types::chrono::{DateTime, Utc};

pub mod auth;
pub mod transaction;

pub use auth::*;
pub use transaction::*;

/// User account row.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. API output goes through [`auth::UserSummary`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
