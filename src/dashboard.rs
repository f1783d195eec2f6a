//! Dashboard responder — shapes the role-scoped payload returned to an
//! authenticated user's dashboard request.

use serde::Serialize;

use crate::models::{AuthenticatedUser, RoleId, UserProjection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Authentication required")]
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardPayload {
    pub message: String,
    pub role: RoleId,
    pub user: UserProjection,
}

/// Build the dashboard payload for `user`.
///
/// The auth layer should never let an anonymous request reach this point;
/// if one does, it fails with [`DashboardError::Unauthorized`].
pub fn build_dashboard_payload(
    user: Option<&AuthenticatedUser>,
) -> Result<DashboardPayload, DashboardError> {
    let user = user.ok_or_else(|| {
        tracing::error!("Dashboard requested without an authenticated user");
        DashboardError::Unauthorized
    })?;

    Ok(DashboardPayload {
        message: format!(
            "Welcome to the {} dashboard, {}!",
            user.role.descriptor().title,
            user.name
        ),
        role: user.role,
        user: UserProjection::from(user),
    })
}
