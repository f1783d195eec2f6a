//! Role registry — static catalog of the user roles the UI offers.
//!
//! Pure data. The `id` of each descriptor is the contract between the UI
//! and the form normalizer; see [`RoleId`].

use serde::Serialize;

use crate::models::RoleId;

/// Declarative description of a user role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDescriptor {
    pub id: RoleId,
    pub title: &'static str,
    pub description: &'static str,
    pub feature_list: &'static [&'static str],
    /// Presentation-only metadata consumed by the UI.
    pub icon: &'static str,
    pub accent: &'static str,
}

static CATALOG: [RoleDescriptor; 3] = [
    RoleDescriptor {
        id: RoleId::Patient,
        title: "Patient",
        description: "Book appointments, share prescriptions and follow your health status.",
        feature_list: &[
            "Book and track appointments",
            "Upload prescriptions",
            "View health status",
        ],
        icon: "user",
        accent: "#2563eb",
    },
    RoleDescriptor {
        id: RoleId::Doctor,
        title: "Doctor",
        description: "Review patient records and manage consultations.",
        feature_list: &[
            "Manage consultations",
            "Review uploaded reports",
            "Issue prescriptions",
        ],
        icon: "stethoscope",
        accent: "#16a34a",
    },
    RoleDescriptor {
        id: RoleId::FrontlineWorker,
        title: "Frontline Worker",
        description: "Register patients in the field and coordinate referrals.",
        feature_list: &[
            "Register patients on site",
            "Coordinate referrals",
            "Track community visits",
        ],
        icon: "heart-handshake",
        accent: "#ea580c",
    },
];

/// All role descriptors, in display order.
pub fn catalog() -> &'static [RoleDescriptor] {
    &CATALOG
}

impl RoleId {
    pub fn descriptor(&self) -> &'static RoleDescriptor {
        match self {
            RoleId::Patient => &CATALOG[0],
            RoleId::Doctor => &CATALOG[1],
            RoleId::FrontlineWorker => &CATALOG[2],
        }
    }
}
