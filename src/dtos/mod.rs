//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod link;
pub mod participant;
pub mod trip;

// Re-exports per facilitare l'import
pub use link::{CreateLinkDTO, CreateLinkRequest, LinkCreatedResponse, LinkDTO, LinksResponse};
pub use participant::{
    CreateInviteRequest, CreateParticipantDTO, InviteCreatedResponse, ParticipantDTO,
    ParticipantsResponse,
};
pub use trip::{CreateTripDTO, CreateTripRequest, TripCreatedResponse, TripDTO, TripDetailsResponse};
