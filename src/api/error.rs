//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::dashboard::DashboardError;
use crate::models::ValidationError;
use crate::store::StoreError;
use crate::upload::{UploadError, PDF_ONLY_MESSAGE};

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Payload too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: u64 },
    #[error("Unsupported media type")]
    UnsupportedMediaType,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Authentication required".to_string(),
            ),
            ApiError::Forbidden(detail) => (StatusCode::FORBIDDEN, "FORBIDDEN", detail.clone()),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                err.to_string(),
            ),
            ApiError::PayloadTooLarge { limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!("File too large. Maximum {limit} bytes."),
            ),
            ApiError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                PDF_ONLY_MESSAGE.to_string(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::PayloadTooLarge { limit } => ApiError::PayloadTooLarge { limit },
            UploadError::UnsupportedMediaType => ApiError::UnsupportedMediaType,
            UploadError::Interrupted(detail) => ApiError::BadRequest(detail),
            UploadError::Io(e) => ApiError::Internal(format!("upload storage: {e}")),
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Unauthorized => ApiError::Unauthorized,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_returns_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "AUTH_REQUIRED");
    }

    #[tokio::test]
    async fn validation_returns_400_with_field() {
        let err: ApiError = ValidationError::Missing { field: "email" }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "email is required");
    }

    #[tokio::test]
    async fn wrong_type_returns_415_with_pdf_message() {
        let err: ApiError = UploadError::UnsupportedMediaType.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Only PDF files are allowed!");
    }

    #[tokio::test]
    async fn too_large_returns_413_naming_the_limit() {
        let err: ApiError = UploadError::PayloadTooLarge { limit: 5_242_880 }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert!(json["error"]["message"].as_str().unwrap().contains("5242880"));
    }

    #[tokio::test]
    async fn io_failure_hides_details() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/secret/path missing");
        let err: ApiError = UploadError::Io(io).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn interrupted_upload_returns_400() {
        let err: ApiError = UploadError::Interrupted("malformed multipart body".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "malformed multipart body");
    }

    #[tokio::test]
    async fn dashboard_unauthorized_maps_to_401() {
        let err: ApiError = DashboardError::Unauthorized.into();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn forbidden_returns_403() {
        let response = ApiError::Forbidden("patients only".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
