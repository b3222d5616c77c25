//! Estrattori che trasformano gli errori di schema in `AppError::Validation`
//! prima che la logica dell'handler venga eseguita.

use crate::core::AppError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Body JSON deserializzato e validato con `validator`
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(json!({ "body": rejection.body_text() })))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Singolo parametro di path che deve essere un UUID (`{tripId}`, `{participantId}`)
pub struct UuidParam(pub Uuid);

impl<S> FromRequestParts<S> for UuidParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(json!({ "params": rejection.body_text() })))?;
        parse_hyphenated(&raw).map(Self).ok_or_else(|| {
            AppError::validation(json!({ "params": format!("'{raw}' is not a valid UUID") }))
        })
    }
}

/// Solo la forma 8-4-4-4-12: niente forma semplice, graffe o prefisso `urn:uuid:`
fn parse_hyphenated(raw: &str) -> Option<Uuid> {
    if raw.len() != 36 {
        return None;
    }
    Uuid::parse_str(raw).ok()
}
