use super::{Delivery, MailError, MailMessage, Mailer};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{info, instrument};
use uuid::Uuid;

/// Outbox in memoria: nessuna email lascia il processo
pub struct LogMailer {
    outbox: DashMap<String, MailMessage>,
}

impl LogMailer {
    pub fn new() -> Self {
        LogMailer {
            outbox: DashMap::new(),
        }
    }

    /// Messaggi inviati a un indirizzo, in ordine non garantito
    pub fn sent_to(&self, address: &str) -> Vec<MailMessage> {
        self.outbox
            .iter()
            .filter(|entry| entry.value().to == address)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outbox.is_empty()
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    #[instrument(skip(self, message), fields(to = %message.to))]
    async fn send(&self, message: MailMessage) -> Result<Delivery, MailError> {
        let message_id = format!("<{}@plann.er>", Uuid::new_v4());
        info!(subject = %message.subject, "Mail stored in outbox");
        self.outbox.insert(message_id.clone(), message);
        Ok(Delivery {
            message_id,
            preview_url: None,
        })
    }
}
