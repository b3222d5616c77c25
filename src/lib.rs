//! plann.er - backend per la pianificazione di viaggi
//!
//! Espone i moduli principali per il binario e per i test.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod mail;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .nest("/trips", configure_trip_routes())
        .nest("/participants", configure_participant_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes dei viaggi e delle risorse che vi appartengono
fn configure_trip_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", post(create_trip))
        .route("/{trip_id}", get(get_trip))
        .route("/{trip_id}/invite", post(create_invite))
        .route("/{trip_id}/participants", get(list_participants))
        .route("/{trip_id}/links", get(list_links).post(create_link))
}

/// Configura le routes dei singoli partecipanti
fn configure_participant_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new().route("/{participant_id}/confirm", get(confirm_participant))
}
