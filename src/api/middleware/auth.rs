//! Bearer token authentication middleware.
//!
//! Extracts `Authorization: Bearer <token>`, resolves it against the
//! `SessionStore`, and injects `AuthenticatedUser` into request extensions
//! for downstream handlers.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Require a live session.
///
/// Accesses `ApiContext` from request extensions (injected by Extension layer).
pub async fn require_user(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_user_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_user_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    let token = bearer_token(&req).ok_or(ApiError::Unauthorized)?;

    // RwLock guard lives only inside resolve(), never across .await
    let user = ctx.sessions.resolve(&token)?.ok_or_else(|| {
        tracing::warn!(path = %req.uri().path(), "Rejected unknown bearer token");
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request<axum::body::Body>) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
