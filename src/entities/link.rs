//! Link entity - Riferimento (titolo + URL) allegato a un viaggio

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Link {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub trip_id: Uuid,
}
