//! Trip services - Creazione e lettura dei viaggi

use crate::core::{AppError, AppState, UuidParam, ValidatedJson, require_trip};
use crate::dtos::{CreateTripDTO, CreateTripRequest, TripCreatedResponse, TripDetailsResponse};
use crate::repositories::Create;
use axum::extract::{Json, State};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state, body), fields(destination = %body.destination))]
pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateTripRequest>,
) -> Result<Json<TripCreatedResponse>, AppError> {
    debug!("Creating new trip");
    // 1. La partenza non può essere nel passato
    // 2. Il ritorno non può precedere la partenza
    // 3. Salvare viaggio, owner e invitati in un'unica transazione
    if body.starts_at < Utc::now() {
        warn!("Trip start date in the past: {}", body.starts_at);
        return Err(AppError::client("Invalid trip start date."));
    }

    if body.ends_at < body.starts_at {
        warn!("Trip end date before start date: {}", body.ends_at);
        return Err(AppError::client("Invalid trip end date."));
    }

    let invited = body.emails_to_invite.len();
    let trip = state.trip.create(&CreateTripDTO::from(body)).await?;

    info!("Trip {} created with {} invited participants", trip.id, invited);
    Ok(Json(TripCreatedResponse { trip_id: trip.id }))
}

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn get_trip(
    State(state): State<Arc<AppState>>,
    UuidParam(trip_id): UuidParam,
) -> Result<Json<TripDetailsResponse>, AppError> {
    let trip = require_trip(&state, &trip_id).await?;
    Ok(Json(TripDetailsResponse { trip: trip.into() }))
}
