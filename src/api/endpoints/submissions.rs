//! Form submission endpoint — normalizes login/registration forms.

use std::str::FromStr;

use axum::Json;
use serde::Deserialize;

use crate::api::types::{ApiResponse, ApiResult};
use crate::models::Mode;
use crate::submission::{self, RawFormInput, SubmissionRecord};

#[derive(Deserialize)]
pub struct SubmissionRequest {
    pub role: String,
    pub mode: String,
    #[serde(default)]
    pub form: RawFormInput,
}

/// `POST /api/submissions` — returns the canonical submission record.
pub async fn normalize(Json(payload): Json<SubmissionRequest>) -> ApiResult<SubmissionRecord> {
    let mode = Mode::from_str(&payload.mode)?;
    let record = submission::normalize(&payload.form, &payload.role, mode)?;

    tracing::debug!(role = %record.role, mode = %record.mode, "Submission normalized");

    Ok(ApiResponse::ok(record))
}
