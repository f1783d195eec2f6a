//! Intake API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Protected middleware stack (outermost → innermost):
//! 1. Extension(ApiContext) → 2. Cache-Control → 3. Auth validator → 4. Audit logger

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Headroom on top of the file limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the intake API router.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost layer).
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn intake_api_router(ctx: ApiContext) -> Router {
    let body_limit = usize::try_from(ctx.max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    // Layers are applied from bottom (innermost) to top (outermost).
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let protected = Router::new()
        .route("/dashboard", get(endpoints::dashboard::show))
        .route(
            "/patient/health-status",
            get(endpoints::patient::health_status),
        )
        .route(
            "/uploads/:category",
            post(endpoints::uploads::upload).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::auth::require_user))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Extension must be outermost so middleware can extract ApiContext
        .layer(axum::Extension(ctx.clone()));

    // Unprotected routes (no auth required)
    let public = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/roles", get(endpoints::roles::list))
        .route("/submissions", post(endpoints::submissions::normalize))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::Extension(ctx));

    Router::new()
        .nest("/api", protected)
        .nest("/api", public)
        .layer(CorsLayer::permissive())
}
