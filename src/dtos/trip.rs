//! Trip DTOs - Data Transfer Objects per viaggi

use crate::entities::Trip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError};

/// Body di `POST /trips`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 4, message = "Destination must have at least 4 characters"))]
    pub destination: String,

    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,

    #[validate(length(min = 1, message = "Owner name is required"))]
    pub owner_name: String,

    #[validate(email(message = "Owner email must be a valid email address"))]
    pub owner_email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_list"))]
    pub emails_to_invite: Vec<String>,
}

fn validate_email_list(emails: &[String]) -> Result<(), ValidationError> {
    if emails.iter().all(|email| email.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message("Every invited address must be a valid email address".into()))
    }
}

/// DTO per creare un nuovo viaggio insieme a owner e invitati (senza id, assegnati dal repository)
#[derive(Debug, Clone)]
pub struct CreateTripDTO {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

impl From<CreateTripRequest> for CreateTripDTO {
    fn from(value: CreateTripRequest) -> Self {
        Self {
            destination: value.destination,
            starts_at: value.starts_at,
            ends_at: value.ends_at,
            owner_name: value.owner_name,
            owner_email: value.owner_email,
            emails_to_invite: value.emails_to_invite,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TripCreatedResponse {
    pub trip_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripDTO {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
}

impl From<Trip> for TripDTO {
    fn from(value: Trip) -> Self {
        Self {
            id: value.id,
            destination: value.destination,
            starts_at: value.starts_at,
            ends_at: value.ends_at,
            is_confirmed: value.is_confirmed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TripDetailsResponse {
    pub trip: TripDTO,
}
