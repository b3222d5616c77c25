//! Link services - Link di riferimento allegati a un viaggio

use crate::core::{AppError, AppState, UuidParam, ValidatedJson, require_trip};
use crate::dtos::{CreateLinkDTO, CreateLinkRequest, LinkCreatedResponse, LinkDTO, LinksResponse};
use crate::repositories::Create;
use axum::extract::{Json, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[debug_handler]
#[instrument(skip(state, body), fields(trip_id = %trip_id))]
pub async fn create_link(
    State(state): State<Arc<AppState>>,
    UuidParam(trip_id): UuidParam,
    ValidatedJson(body): ValidatedJson<CreateLinkRequest>,
) -> Result<Json<LinkCreatedResponse>, AppError> {
    debug!("Creating link for trip");
    let trip = require_trip(&state, &trip_id).await?;

    let link = state
        .link
        .create(&CreateLinkDTO {
            title: body.title,
            url: body.url,
            trip_id: trip.id,
        })
        .await?;

    info!("Link {} created", link.id);
    Ok(Json(LinkCreatedResponse { link_id: link.id }))
}

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn list_links(
    State(state): State<Arc<AppState>>,
    UuidParam(trip_id): UuidParam,
) -> Result<Json<LinksResponse>, AppError> {
    let trip = require_trip(&state, &trip_id).await?;

    let links: Vec<LinkDTO> = state
        .link
        .find_many_by_trip_id(&trip.id)
        .await?
        .into_iter()
        .map(LinkDTO::from)
        .collect();

    debug!("Found {} links", links.len());
    Ok(Json(LinksResponse { links }))
}
