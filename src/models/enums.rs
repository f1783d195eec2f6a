use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The wire string doubles as the serde name.
macro_rules! str_enum {
    ($name:ident ($field:literal) { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ValidationError::Invalid {
                        field: $field,
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Role ids are the contract between the UI and the intake API.
str_enum!(RoleId ("role") {
    Patient => "patient",
    Doctor => "doctor",
    FrontlineWorker => "frontlineWorker",
});

str_enum!(Mode ("mode") {
    Login => "login",
    Register => "register",
});

str_enum!(DocumentCategory ("category") {
    Prescriptions => "prescriptions",
    Reports => "reports",
});

str_enum!(AppointmentStatus ("status") {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 2] = [DocumentCategory::Prescriptions, DocumentCategory::Reports];

    /// Subdirectory of the upload root holding this category's files.
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_id_round_trip() {
        for (variant, s) in [
            (RoleId::Patient, "patient"),
            (RoleId::Doctor, "doctor"),
            (RoleId::FrontlineWorker, "frontlineWorker"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RoleId::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn role_id_serializes_as_wire_id() {
        let json = serde_json::to_string(&RoleId::FrontlineWorker).unwrap();
        assert_eq!(json, "\"frontlineWorker\"");
        let parsed: RoleId = serde_json::from_str("\"doctor\"").unwrap();
        assert_eq!(parsed, RoleId::Doctor);
    }

    #[test]
    fn mode_round_trip() {
        assert_eq!(Mode::from_str("login").unwrap(), Mode::Login);
        assert_eq!(Mode::from_str("register").unwrap(), Mode::Register);
        assert_eq!(Mode::Register.to_string(), "register");
    }

    #[test]
    fn document_category_dirs() {
        assert_eq!(DocumentCategory::Prescriptions.dir_name(), "prescriptions");
        assert_eq!(DocumentCategory::Reports.dir_name(), "reports");
        assert_eq!(DocumentCategory::ALL.len(), 2);
    }

    #[test]
    fn invalid_enum_returns_field_name() {
        assert_eq!(
            RoleId::from_str("nurse").unwrap_err(),
            ValidationError::Invalid {
                field: "role",
                value: "nurse".into()
            }
        );
        // Ids are case-sensitive
        assert!(RoleId::from_str("Patient").is_err());
        assert!(Mode::from_str("").is_err());
        assert!(DocumentCategory::from_str("../etc").is_err());
    }
}
