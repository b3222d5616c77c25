//! Link DTOs - Data Transfer Objects per i link di un viaggio

use crate::entities::Link;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body di `POST /trips/{tripId}/links`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 4, message = "Title must have at least 4 characters"))]
    pub title: String,

    #[validate(url(message = "Url must be a valid URL"))]
    pub url: String,
}

/// DTO per creare un nuovo link (senza id)
#[derive(Debug, Clone)]
pub struct CreateLinkDTO {
    pub title: String,
    pub url: String,
    pub trip_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LinkCreatedResponse {
    pub link_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LinkDTO {
    pub id: Uuid,
    pub title: String,
    pub url: String,
}

impl From<Link> for LinkDTO {
    fn from(value: Link) -> Self {
        Self {
            id: value.id,
            title: value.title,
            url: value.url,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LinksResponse {
    pub links: Vec<LinkDTO>,
}
