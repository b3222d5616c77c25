//! Participant DTOs - Data Transfer Objects per partecipanti e inviti

use crate::entities::Participant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body di `POST /trips/{tripId}/invite`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInviteRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
}

/// DTO per creare un nuovo partecipante (senza id)
#[derive(Debug, Clone)]
pub struct CreateParticipantDTO {
    pub name: Option<String>,
    pub email: String,
    pub trip_id: Uuid,
    pub is_owner: bool,
    pub is_confirmed: bool,
}

impl CreateParticipantDTO {
    /// Partecipante invitato via email: nessun nome, in attesa di conferma
    pub fn invited(email: impl Into<String>, trip_id: Uuid) -> Self {
        Self {
            name: None,
            email: email.into(),
            trip_id,
            is_owner: false,
            is_confirmed: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InviteCreatedResponse {
    pub participant_id: Uuid,
}

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantDTO {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
}

impl From<Participant> for ParticipantDTO {
    fn from(value: Participant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            is_confirmed: value.is_confirmed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ParticipantsResponse {
    pub participants: Vec<ParticipantDTO>,
}
