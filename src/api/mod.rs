//! Intake API.
//!
//! Exposes the intake modules as HTTP endpoints for the web UI. Routes are
//! nested under `/api/`; protected routes run behind Auth → Audit.
//!
//! The router is composable — `intake_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::intake_api_router;
pub use server::{start_server, IntakeServer};
pub use types::ApiContext;
