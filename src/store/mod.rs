//! Credential store
//!
//! Narrow persistence seam the auth service depends on: look a user up by
//! email, insert a new user. The service neither knows nor cares whether
//! the backing store is Postgres or an in-memory map in tests.

use axum::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::User;

/// Credential store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            // The unique index on users.email is the authority on duplicate
            // registrations; a lost check-then-insert race still lands here.
            if db_err.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Database(e.to_string())
    }
}

/// Store of user credentials, keyed by email
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user and return the assigned id.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken.
    async fn insert(&self, name: &str, email: &str, password_hash: &str)
        -> Result<i64, StoreError>;
}

/// Postgres-backed credential store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
