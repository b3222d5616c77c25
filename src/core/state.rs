//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository, il trasporto mail e la configurazione
//! necessari per gestire le richieste.

use crate::core::{Config, DateFormatter};
use crate::mail::Mailer;
use crate::repositories::{LinkRepository, ParticipantRepository, TripRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei viaggi
    pub trip: TripRepository,

    /// Repository per la gestione dei partecipanti
    pub participant: ParticipantRepository,

    /// Repository per la gestione dei link
    pub link: LinkRepository,

    /// Trasporto delle email in uscita
    pub mailer: Arc<dyn Mailer>,

    /// Formato lungo localizzato per le date nelle email
    pub dates: DateFormatter,

    /// Base dei link di conferma inviati via email, senza slash finale
    pub api_base_url: String,

    /// Frontend verso cui redirigere dopo la conferma
    pub web_base_url: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `config` - Configurazione già validata
    /// * `mailer` - Trasporto mail scelto in base a `config.mail_transport`
    pub fn new(pool: SqlitePool, config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            trip: TripRepository::new(pool.clone()),
            participant: ParticipantRepository::new(pool.clone()),
            link: LinkRepository::new(pool),
            mailer,
            dates: DateFormatter::new(config.date_locale),
            api_base_url: config.api_base_url.clone(),
            web_base_url: config.web_base_url.clone(),
        }
    }
}
