//! Patient-only endpoints.

use axum::extract::State;
use axum::Extension;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ApiResponse, ApiResult};
use crate::health_status::{AppointmentCounts, HealthStatus};
use crate::models::{AuthenticatedUser, RoleId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatusResponse {
    pub status: HealthStatus,
    pub recent_appointments: u32,
    pub upcoming_appointments: u32,
}

/// `GET /api/patient/health-status` — check-up status from appointment history.
pub async fn health_status(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<HealthStatusResponse> {
    if user.role != RoleId::Patient {
        return Err(ApiError::Forbidden(
            "Health status is only available to patients".into(),
        ));
    }

    let appointments = ctx.appointments.for_patient(&user.id)?;
    let counts = AppointmentCounts::tally(&appointments, chrono::Local::now().date_naive());

    Ok(ApiResponse::ok(HealthStatusResponse {
        status: counts.status(),
        recent_appointments: counts.recent,
        upcoming_appointments: counts.upcoming,
    }))
}
