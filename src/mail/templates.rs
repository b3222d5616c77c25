//! Template delle email

use super::{MailMessage, Mailbox};

/// Link inserito nell'email di invito
pub fn confirmation_link(api_base_url: &str, participant_id: &impl std::fmt::Display) -> String {
    format!("{api_base_url}/participants/{participant_id}/confirm")
}

/// Email di invito a un viaggio. Le date arrivano già formattate.
pub fn participant_invite(
    to: &str,
    destination: &str,
    formatted_start_date: &str,
    formatted_end_date: &str,
    confirmation_link: &str,
) -> MailMessage {
    let html = format!(
        r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6;">
            <p>
              Você foi convidado(a) para participar de uma viagem para <strong>{destination}</strong> 
              nas datas de <strong>{formatted_start_date} a {formatted_end_date}</strong>.
            </p>
            <p>Para confirmar sua presença na viagem, clique no link abaixo:</p>
            <p><a href="{confirmation_link}">Confirmar presença</a></p>
            <p>Caso você não saiba do que se trata este e-mail, apenas ignore-o.</p>
          </div>"#
    );

    MailMessage {
        from: Mailbox::team(),
        to: to.to_string(),
        subject: format!(
            "Confirme sua presença na viagem para {destination} em {formatted_start_date}"
        ),
        html,
    }
}
