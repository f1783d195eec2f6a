//! Dashboard endpoint.

use axum::Extension;

use crate::api::types::{ApiResponse, ApiResult};
use crate::dashboard::{build_dashboard_payload, DashboardPayload};
use crate::models::AuthenticatedUser;

/// `GET /api/dashboard` — role-scoped greeting and allowlisted user view.
///
/// The user is optional at the extractor level so a missing auth layer
/// surfaces as 401 from the responder instead of a 500 extractor rejection.
pub async fn show(user: Option<Extension<AuthenticatedUser>>) -> ApiResult<DashboardPayload> {
    let payload = build_dashboard_payload(user.as_ref().map(|Extension(u)| u))?;
    Ok(ApiResponse::ok(payload))
}
