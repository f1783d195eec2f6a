//! Document upload endpoint.
//!
//! `POST /api/uploads/:category` — single multipart `file` field, PDF only,
//! stored under `<upload root>/<category>/`.

use std::str::FromStr;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Extension;
use futures_util::StreamExt;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ApiResponse, ApiResult};
use crate::models::{AuthenticatedUser, DocumentCategory};
use crate::upload::{StoredFileDescriptor, UploadError, UploadIntake};

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

pub async fn upload(
    State(ctx): State<ApiContext>,
    Path(category): Path<String>,
    Extension(user): Extension<AuthenticatedUser>,
    mut multipart: Multipart,
) -> ApiResult<StoredFileDescriptor> {
    let category = DocumentCategory::from_str(&category)
        .map_err(|_| ApiError::NotFound(format!("Unknown document category: {category}")))?;
    let intake = ctx.upload_intake(category);

    let mut stored: Option<StoredFileDescriptor> = None;
    if let Err(err) = receive_file(&mut multipart, &intake, &mut stored).await {
        // A file accepted before the request went bad is not kept
        if let Some(orphan) = stored {
            if let Err(e) = tokio::fs::remove_file(orphan.path()).await {
                tracing::error!(path = %orphan.path().display(), "Failed to remove rejected upload: {e}");
            }
        }
        tracing::warn!(user_id = %user.id, category = %category, "Upload rejected: {err}");
        return Err(err);
    }

    let stored = stored.ok_or_else(|| ApiError::BadRequest("No file provided".into()))?;

    tracing::info!(
        user_id = %user.id,
        category = %category,
        filename = %stored.generated_filename,
        "Upload accepted"
    );

    Ok(ApiResponse::ok(stored))
}

/// Stream the single `file` field straight into the intake.
async fn receive_file(
    multipart: &mut Multipart,
    intake: &UploadIntake,
    stored: &mut Option<StoredFileDescriptor>,
) -> Result<(), ApiError> {
    let limit = intake.max_bytes();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from(multipart_error(e, limit)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if stored.is_some() {
            return Err(ApiError::BadRequest("Only one file per upload".into()));
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let chunks = field.map(move |chunk| chunk.map_err(|e| multipart_error(e, limit)));
        *stored = Some(intake.accept(chunks, &filename, None).await?);
    }

    Ok(())
}

/// Body-limit overruns surface from the multipart parser; report them as
/// the size violation they are.
fn multipart_error(err: MultipartError, limit: u64) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::PayloadTooLarge { limit }
    } else {
        UploadError::Interrupted(err.body_text())
    }
}
