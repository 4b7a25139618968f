//! Authentication request/response DTOs

use serde::{Deserialize, Serialize};

/// Request body for account registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: the session token plus a public-safe user
/// summary. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// User fields safe to expose to clients
#[derive(Debug, Serialize, Clone)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Plain `{message}` body used for confirmations and error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
