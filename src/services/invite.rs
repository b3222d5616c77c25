//! Invite services - Invito di un partecipante via email

use crate::core::{AppError, AppState, UuidParam, ValidatedJson, require_trip};
use crate::dtos::{CreateInviteRequest, CreateParticipantDTO, InviteCreatedResponse};
use crate::mail::templates::{confirmation_link, participant_invite};
use crate::repositories::Create;
use axum::extract::{Json, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[debug_handler]
#[instrument(skip(state, body), fields(trip_id = %trip_id))]
pub async fn create_invite(
    State(state): State<Arc<AppState>>,
    UuidParam(trip_id): UuidParam, // parametro dalla URL /trips/{trip_id}/invite
    ValidatedJson(body): ValidatedJson<CreateInviteRequest>,
) -> Result<Json<InviteCreatedResponse>, AppError> {
    debug!("Inviting participant to trip");
    // 1. Il viaggio deve esistere, altrimenti "Trip not found."
    // 2. Creare il partecipante: nessun controllo di unicità su (email, trip)
    // 3. Formattare le date del viaggio e costruire il link di conferma
    // 4. Inviare l'email di invito
    // 5. Ritornare l'id del partecipante
    let trip = require_trip(&state, &trip_id).await?;

    let participant = state
        .participant
        .create(&CreateParticipantDTO::invited(body.email, trip.id))
        .await?;

    info!("Participant {} created", participant.id);

    let formatted_start_date = state.dates.long_date(&trip.starts_at);
    let formatted_end_date = state.dates.long_date(&trip.ends_at);
    let link = confirmation_link(&state.api_base_url, &participant.id);

    let message = participant_invite(
        &participant.email,
        &trip.destination,
        &formatted_start_date,
        &formatted_end_date,
        &link,
    );

    // se l'invio fallisce il partecipante resta comunque creato
    let delivery = state.mailer.send(message).await?;

    match delivery.preview_url() {
        Some(url) => info!(preview_url = %url, "Invite mail sent"),
        None => info!(message_id = %delivery.message_id, "Invite mail sent"),
    }

    Ok(Json(InviteCreatedResponse {
        participant_id: participant.id,
    }))
}
