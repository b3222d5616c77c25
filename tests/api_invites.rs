//! Integration tests per POST /trips/{tripId}/invite

mod common;

#[cfg(test)]
mod invite_tests {
    use super::common::{
        API_BASE_URL, FLORIANOPOLIS, count_rows, create_test_server,
        create_test_server_with_mailer, fixture_id,
    };
    use async_trait::async_trait;
    use axum_test::http::StatusCode;
    use planner::mail::{Delivery, MailError, MailMessage, Mailer};
    use planner::repositories::{ParticipantRepository, Read};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use uuid::Uuid;

    /// Trasporto che rifiuta ogni messaggio
    struct RejectingMailer;

    #[async_trait]
    impl Mailer for RejectingMailer {
        async fn send(&self, _message: MailMessage) -> Result<Delivery, MailError> {
            Err(MailError::Rejected(StatusCode::BAD_GATEWAY))
        }
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_participant_success(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, mailer) = create_test_server(pool.clone());

        let response = server
            .post(&format!("/trips/{FLORIANOPOLIS}/invite"))
            .json(&json!({ "email": "mayk@plann.er" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let participant_id = Uuid::parse_str(body["participantId"].as_str().unwrap()).unwrap();

        let participant = ParticipantRepository::new(pool)
            .read(&participant_id)
            .await?
            .expect("participant should be stored");
        assert_eq!(participant.trip_id, fixture_id(FLORIANOPOLIS));
        assert_eq!(participant.email, "mayk@plann.er");
        assert!(!participant.is_confirmed);

        let sent = mailer.sent_to("mayk@plann.er");
        assert_eq!(sent.len(), 1, "Deve partire esattamente un'email");
        let mail = &sent[0];
        assert_eq!(mail.from.name, "Equipe plann.er");
        assert_eq!(mail.from.address, "equipe@plann.er");
        assert_eq!(
            mail.subject,
            "Confirme sua presença na viagem para Florianópolis em 10 de julho de 2024"
        );
        assert!(mail.html.contains("<strong>10 de julho de 2024 a 17 de julho de 2024</strong>"));
        assert!(mail.html.contains(&format!(
            "{API_BASE_URL}/participants/{participant_id}/confirm"
        )));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_same_email_twice(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, mailer) = create_test_server(pool.clone());
        let path = format!("/trips/{FLORIANOPOLIS}/invite");

        let first: Value = server
            .post(&path)
            .json(&json!({ "email": "mayk@plann.er" }))
            .await
            .json();
        let second: Value = server
            .post(&path)
            .json(&json!({ "email": "mayk@plann.er" }))
            .await
            .json();

        assert_ne!(first["participantId"], second["participantId"]);
        assert_eq!(count_rows(&pool, "participants").await, 2);
        assert_eq!(mailer.sent_to("mayk@plann.er").len(), 2);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_unknown_trip(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, mailer) = create_test_server(pool.clone());

        let response = server
            .post(&format!("/trips/{}/invite", Uuid::new_v4()))
            .json(&json!({ "email": "mayk@plann.er" }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "message": "Trip not found." }));
        assert_eq!(count_rows(&pool, "participants").await, 0);
        assert!(mailer.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_malformed_trip_id(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, mailer) = create_test_server(pool.clone());

        let response = server
            .post("/trips/not-a-uuid/invite")
            .json(&json!({ "email": "mayk@plann.er" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid input.");
        assert!(body.get("errors").is_some());
        assert_eq!(count_rows(&pool, "participants").await, 0);
        assert!(mailer.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_invalid_email(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, mailer) = create_test_server(pool.clone());

        let response = server
            .post(&format!("/trips/{FLORIANOPOLIS}/invite"))
            .json(&json!({ "email": "mayk.plann.er" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid input.");
        assert!(body["errors"].get("email").is_some());
        assert_eq!(count_rows(&pool, "participants").await, 0);
        assert!(mailer.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_missing_email(pool: SqlitePool) -> sqlx::Result<()> {
        let (server, _mailer) = create_test_server(pool.clone());

        let response = server
            .post(&format!("/trips/{FLORIANOPOLIS}/invite"))
            .json(&json!({}))
            .await;

        response.assert_status_bad_request();
        assert_eq!(count_rows(&pool, "participants").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("trips")))]
    async fn test_invite_mail_failure_keeps_participant(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server_with_mailer(pool.clone(), Arc::new(RejectingMailer));

        let response = server
            .post(&format!("/trips/{FLORIANOPOLIS}/invite"))
            .json(&json!({ "email": "mayk@plann.er" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Mail delivery failed" }));
        assert_eq!(count_rows(&pool, "participants").await, 1);
        Ok(())
    }
}
