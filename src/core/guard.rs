//! Guard condiviso dagli handler che lavorano su un viaggio esistente

use crate::core::{AppError, AppState};
use crate::entities::Trip;
use crate::repositories::Read;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Carica il viaggio o fallisce con l'errore client "Trip not found."
///
/// Sola lettura. Gli errori del database passano invariati.
#[instrument(skip(state))]
pub async fn require_trip(state: &AppState, trip_id: &Uuid) -> Result<Trip, AppError> {
    debug!("Looking up trip");
    state.trip.read(trip_id).await?.ok_or_else(|| {
        warn!("Trip not found: {}", trip_id);
        AppError::client("Trip not found.")
    })
}
