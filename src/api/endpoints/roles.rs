//! Role catalog endpoint.

use crate::api::types::{ApiResponse, ApiResult};
use crate::roles::{self, RoleDescriptor};

/// `GET /api/roles` — role descriptors for the sign-in screen.
pub async fn list() -> ApiResult<&'static [RoleDescriptor]> {
    Ok(ApiResponse::ok(roles::catalog()))
}
