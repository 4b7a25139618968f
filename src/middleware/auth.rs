//! Authorization gate
//!
//! Extractor that verifies the bearer token on every protected route and
//! injects the authenticated identity into the handler. Identity is
//! established here exactly once per request; handlers never re-derive it
//! from the body or query string.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use std::sync::Arc;

use crate::auth::{verify_token, AuthService};
use crate::models::MessageResponse;

/// Authenticated identity extracted from a verified session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Uniform rejection. A missing header, a malformed token, a bad signature,
/// and an expired token are indistinguishable to the caller; the sub-reason
/// is only logged.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(MessageResponse::new("Unauthorized")),
    )
        .into_response()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    tracing::debug!("request without a usable bearer authorization header");
                    unauthorized()
                })?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            unauthorized()
        })?;

        tracing::debug!(user_id = claims.user_id, "token validated");

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
