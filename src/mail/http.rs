use super::{Delivery, MailError, MailMessage, Mailer};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, instrument};

/// Inoltra ogni messaggio come JSON a un servizio mail esterno.
///
/// Il servizio risponde con `{ "message_id": ..., "preview_url": ... }`.
/// Nessun retry: un errore di invio risale all'handler.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

impl HttpMailer {
    pub fn new(api_url: String, api_token: Option<String>) -> Self {
        HttpMailer {
            client: reqwest::Client::new(),
            api_url,
            api_token,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    #[instrument(skip(self, message), fields(to = %message.to, api_url = %self.api_url))]
    async fn send(&self, message: MailMessage) -> Result<Delivery, MailError> {
        debug!("Posting mail to transport");
        let mut request = self.client.post(&self.api_url).json(&message);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
                Ok(response.json::<Delivery>().await?)
            }
            status => {
                error!("Mail transport returned {}", status);
                Err(MailError::Rejected(status))
            }
        }
    }
}
