//! Participant services - Elenco e conferma dei partecipanti

use crate::core::{AppError, AppState, UuidParam, require_trip};
use crate::dtos::{ParticipantDTO, ParticipantsResponse};
use crate::repositories::Read;
use axum::{
    extract::{Json, State},
    response::Redirect,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    UuidParam(trip_id): UuidParam,
) -> Result<Json<ParticipantsResponse>, AppError> {
    let trip = require_trip(&state, &trip_id).await?;

    let participants: Vec<ParticipantDTO> = state
        .participant
        .find_many_by_trip_id(&trip.id)
        .await?
        .into_iter()
        .map(ParticipantDTO::from)
        .collect();

    debug!("Found {} participants", participants.len());
    Ok(Json(ParticipantsResponse { participants }))
}

/// Destinazione del link contenuto nell'email di invito
#[instrument(skip(state), fields(participant_id = %participant_id))]
pub async fn confirm_participant(
    State(state): State<Arc<AppState>>,
    UuidParam(participant_id): UuidParam,
) -> Result<Redirect, AppError> {
    let participant = state.participant.read(&participant_id).await?.ok_or_else(|| {
        warn!("Participant not found");
        AppError::client("Participant not found.")
    })?;

    if participant.is_confirmed {
        debug!("Participant already confirmed");
    } else {
        state.participant.confirm(&participant.id).await?;
        info!("Participant confirmed");
    }

    Ok(Redirect::to(&format!(
        "{}/trips/{}",
        state.web_base_url, participant.trip_id
    )))
}
