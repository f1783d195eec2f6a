//! Shared types for the intake API layer.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::ServerConfig;
use crate::models::{AuthenticatedUser, DocumentCategory};
use crate::store::{AppointmentBook, InMemoryAppointmentBook, StoreError};
use crate::upload::UploadIntake;

// ═══════════════════════════════════════════════════════════
// API context — shared state for the intake router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub sessions: Arc<SessionStore>,
    pub appointments: Arc<dyn AppointmentBook>,
    pub upload_root: PathBuf,
    pub max_upload_bytes: u64,
}

impl ApiContext {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            appointments: Arc::new(InMemoryAppointmentBook::new()),
            upload_root: config.upload_root.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn with_appointments(mut self, book: Arc<dyn AppointmentBook>) -> Self {
        self.appointments = book;
        self
    }

    /// Intake writing into this category's directory under the upload root.
    pub fn upload_intake(&self, category: DocumentCategory) -> UploadIntake {
        UploadIntake::for_category(&self.upload_root, category, self.max_upload_bytes)
    }
}

// ═══════════════════════════════════════════════════════════
// Success envelope
// ═══════════════════════════════════════════════════════════

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

// ═══════════════════════════════════════════════════════════
// Session store — bearer token → authenticated user
// ═══════════════════════════════════════════════════════════

/// Hash a bearer token string using SHA-256.
pub fn hash_token(token: &str) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

/// Generate a random bearer token (URL-safe base64, 32 bytes of entropy).
pub fn generate_token() -> String {
    use base64::Engine;
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Sessions issued by the upstream login flow. Only token hashes are kept.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<[u8; 32], AuthenticatedUser>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session for `user` and return its bearer token.
    pub fn issue(&self, user: AuthenticatedUser) -> Result<String, StoreError> {
        let token = generate_token();
        self.sessions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(hash_token(&token), user);
        Ok(token)
    }

    pub fn resolve(&self, token: &str) -> Result<Option<AuthenticatedUser>, StoreError> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(sessions.get(&hash_token(token)).cloned())
    }
}
