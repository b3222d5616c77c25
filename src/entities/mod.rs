//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod link;
pub mod participant;
pub mod trip;

// Re-exports per facilitare l'import
pub use link::Link;
pub use participant::Participant;
pub use trip::Trip;
