//! Authentication service
//!
//! Core business logic for account registration and credential login.

use std::sync::Arc;

use thiserror::Error;

use crate::models::LoginResponse;
use crate::store::{StoreError, UserStore};

use super::jwt::{issue_token, JwtError, TokenLifetime};
use super::password::{self, PasswordError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AuthError::EmailTaken,
            StoreError::Database(msg) => AuthError::DatabaseError(msg),
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::HashingError(e.to_string())
    }
}

/// Authentication service
///
/// Stateless across requests; the signing secret and token lifetime are
/// injected once at construction and read-only for the process lifetime.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    jwt_secret: String,
    token_lifetime: TokenLifetime,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        jwt_secret: String,
        token_lifetime: TokenLifetime,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            store,
            jwt_secret,
            token_lifetime,
            bcrypt_cost,
        }
    }

    /// Signing secret shared with the token verifier.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Register a new account. No session is issued; login is a separate
    /// step.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::InvalidInput("All fields are required"));
        }

        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let hash = self.hash_on_worker(password.to_string()).await?;

        // The store's uniqueness constraint still decides a concurrent
        // duplicate; it surfaces as EmailTaken like the lookup above.
        let user_id = self.store.insert(name, email, &hash).await?;
        tracing::info!(user_id, "user registered");

        Ok(())
    }

    /// Verify credentials and issue a session token.
    ///
    /// A missing email and a wrong password produce the identical error, and
    /// the missing-email path still performs one bcrypt verification so the
    /// two are not distinguishable by timing either.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::InvalidInput("Email and password required"));
        }

        let Some(user) = self.store.find_by_email(email).await? else {
            let _ = self
                .verify_on_worker(password.to_string(), password::PHANTOM_HASH.to_string())
                .await?;
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .verify_on_worker(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(user.id, &user.email, &self.jwt_secret, self.token_lifetime)?;
        tracing::debug!(user_id = user.id, "session token issued");

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    /// Run bcrypt hashing on the blocking pool; it is CPU-bound and must
    /// not stall request workers.
    async fn hash_on_worker(&self, password: String) -> Result<String, AuthError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || password::hash_password(&password, cost))
            .await
            .map_err(|e| AuthError::HashingError(e.to_string()))?
            .map_err(AuthError::from)
    }

    async fn verify_on_worker(&self, password: String, hash: String) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }
}
