//! Audit logging middleware.
//!
//! Logs every API request with method, path, response status and, on
//! protected routes, the authenticated user id. Runs innermost (after
//! auth has injected `AuthenticatedUser`).

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::models::AuthenticatedUser;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let user_id = req
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| "anonymous".to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        target: "carebridge::audit",
        %method,
        %path,
        status,
        user_id = %user_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "API access"
    );

    response
}
