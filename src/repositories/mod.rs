//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query usano `sqlx::query_as::<_, T>` con `FromRow`: il controllo avviene a run-time,
//! quindi la build non richiede un database raggiungibile. Lo schema vive in `migrations/`.
//! Gli id sono UUID v4 generati qui, prima dell'INSERT, e salvati come BLOB.

pub mod link;
pub mod participant;
pub mod traits;
pub mod trip;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Read};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use link::LinkRepository;
pub use participant::ParticipantRepository;
pub use trip::TripRepository;
