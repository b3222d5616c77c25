//! Participant entity - Persona invitata a un viaggio

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub name: Option<String>, // solo l'owner ha un nome alla creazione
    pub email: String,
    pub is_confirmed: bool,
    pub is_owner: bool,
    pub trip_id: Uuid,
}
