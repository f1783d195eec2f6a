//! API endpoint handlers.
//!
//! Each module corresponds to one UI surface. Handlers stay thin and
//! delegate to the intake modules at the crate root.

pub mod dashboard;
pub mod health;
pub mod patient;
pub mod roles;
pub mod submissions;
pub mod uploads;
