//! Mail module - Trasporto delle email in uscita
//!
//! Gli handler dipendono solo dal trait [`Mailer`]. Le implementazioni:
//! - [`LogMailer`]: outbox in memoria, usato in sviluppo e nei test
//! - [`HttpMailer`]: inoltra il messaggio a un servizio HTTP esterno

pub mod http;
pub mod outbox;
pub mod templates;

pub use http::HttpMailer;
pub use outbox::LogMailer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Mittente fisso di tutte le email
pub const FROM_NAME: &str = "Equipe plann.er";
pub const FROM_ADDRESS: &str = "equipe@plann.er";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mailbox {
    pub name: String,
    pub address: String,
}

impl Mailbox {
    pub fn team() -> Self {
        Self {
            name: FROM_NAME.to_string(),
            address: FROM_ADDRESS.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MailMessage {
    pub from: Mailbox,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Handle restituito dal trasporto dopo l'invio
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Delivery {
    pub message_id: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Delivery {
    /// URL di anteprima, se il trasporto ne fornisce uno (solo diagnostica)
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("mail transport rejected the message with status {0}")]
    Rejected(reqwest::StatusCode),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: MailMessage) -> Result<Delivery, MailError>;
}
