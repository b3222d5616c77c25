//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori ed estrattori validati
//! - Formattazione date
//! - Guard sui viaggi
//! - Stato applicazione

pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod guard;
pub mod state;

// Re-exports per facilitare l'import
pub use config::{Config, MailTransport};
pub use dates::{DateFormatter, DateLocale};
pub use error::AppError;
pub use extract::{UuidParam, ValidatedJson};
pub use guard::require_trip;
pub use state::AppState;
