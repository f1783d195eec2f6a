use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::RoleId;

/// Authenticated caller as resolved by the session layer.
///
/// Mirrors the full user record, so it may carry fields that must never
/// leave the server. Responses expose a [`UserProjection`] instead.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: RoleId,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AuthenticatedUser {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: RoleId,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            phone: None,
            password_hash: None,
            created_at: None,
        }
    }
}

/// Allowlisted view of a user: the only user shape serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProjection {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: RoleId,
}

impl From<&AuthenticatedUser> for UserProjection {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}
