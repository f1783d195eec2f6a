pub mod appointment;
pub mod enums;
pub mod user;

pub use appointment::Appointment;
pub use enums::{AppointmentStatus, DocumentCategory, Mode, RoleId};
pub use user::{AuthenticatedUser, UserProjection};

/// Rejected input at the intake boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("Invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}
