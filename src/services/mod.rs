//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod invite;
pub mod link;
pub mod participant;
pub mod trip;

// Re-exports per facilitare l'import
pub use invite::create_invite;
pub use link::{create_link, list_links};
pub use participant::{confirm_participant, list_participants};
pub use trip::{create_trip, get_trip};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
