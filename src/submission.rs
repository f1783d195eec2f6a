//! Form normalizer — turns raw registration/login form input into a
//! canonical, role-specific [`SubmissionRecord`].
//!
//! Each role variant owns its field-extraction rule (see
//! [`RoleId::extract_profile`]), so adding a role is a change to the
//! `RoleId` enum plus one extraction function.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Mode, RoleId, ValidationError};

/// Form fields as submitted by the client. Every field is optional text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFormInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Canonical submission. Serializes flat:
/// `{email, role, mode[, name, <role fields>]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub email: String,
    pub role: RoleId,
    pub mode: Mode,
    #[serde(flatten)]
    pub registration: Option<Registration>,
}

/// Fields present only when `mode = register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Role-specific registration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Patient { age: u32, gender: String },
    Doctor { specialization: String },
    FrontlineWorker { phone: String, location: String },
}

impl RoleProfile {
    pub fn role(&self) -> RoleId {
        match self {
            RoleProfile::Patient { .. } => RoleId::Patient,
            RoleProfile::Doctor { .. } => RoleId::Doctor,
            RoleProfile::FrontlineWorker { .. } => RoleId::FrontlineWorker,
        }
    }
}

impl RoleId {
    /// Extract this role's registration fields from raw input.
    pub fn extract_profile(&self, raw: &RawFormInput) -> Result<RoleProfile, ValidationError> {
        match self {
            RoleId::Patient => patient_profile(raw),
            RoleId::Doctor => Ok(RoleProfile::Doctor {
                specialization: trimmed(&raw.specialization),
            }),
            RoleId::FrontlineWorker => Ok(RoleProfile::FrontlineWorker {
                phone: trimmed(&raw.phone),
                location: trimmed(&raw.location),
            }),
        }
    }
}

fn patient_profile(raw: &RawFormInput) -> Result<RoleProfile, ValidationError> {
    let age = parse_age(raw.age.as_deref())?;
    Ok(RoleProfile::Patient {
        age,
        gender: raw.gender.clone().unwrap_or_default(),
    })
}

/// Non-numeric or negative ages are rejected here rather than carried
/// downstream as a sentinel.
fn parse_age(input: Option<&str>) -> Result<u32, ValidationError> {
    let text = input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::Missing { field: "age" })?;

    text.parse::<u32>().map_err(|_| ValidationError::Invalid {
        field: "age",
        value: text.to_string(),
    })
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Normalize a form submission for the selected role and mode.
///
/// Fails with [`ValidationError`] when the email is missing or blank, the
/// role id is unknown, or (patients registering) the age is not a
/// non-negative integer.
pub fn normalize(
    raw: &RawFormInput,
    selected_role_id: &str,
    mode: Mode,
) -> Result<SubmissionRecord, ValidationError> {
    let email = raw
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(ValidationError::Missing { field: "email" })?
        .to_lowercase();

    let role = RoleId::from_str(selected_role_id)?;

    let registration = match mode {
        Mode::Login => None,
        Mode::Register => Some(Registration {
            name: trimmed(&raw.name),
            profile: role.extract_profile(raw)?,
        }),
    };

    Ok(SubmissionRecord {
        email,
        role,
        mode,
        registration,
    })
}
