//! Authentication HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::auth::AuthService;
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// POST /api/auth/register - Create an account
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    auth.register(&req.name, &req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /api/auth/login - Verify credentials and issue a session token
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = auth.login(&req.email, &req.password).await?;

    Ok(Json(response))
}
