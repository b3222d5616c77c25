//! ParticipantRepository - Repository per la gestione dei partecipanti

use super::{Create, Read};
use crate::dtos::CreateParticipantDTO;
use crate::entities::Participant;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct ParticipantRepository {
    connection_pool: SqlitePool,
}

impl ParticipantRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutti i partecipanti di un viaggio, owner compreso
    pub async fn find_many_by_trip_id(&self, trip_id: &Uuid) -> Result<Vec<Participant>, Error> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, email, is_confirmed, is_owner, trip_id
            FROM participants
            WHERE trip_id = ?
            ORDER BY is_owner DESC, email
            "#,
        )
        .bind(trip_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(participants)
    }

    /// Segna il partecipante come confermato
    pub async fn confirm(&self, id: &Uuid) -> Result<(), Error> {
        sqlx::query("UPDATE participants SET is_confirmed = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Create<Participant, CreateParticipantDTO> for ParticipantRepository {
    async fn create(&self, data: &CreateParticipantDTO) -> Result<Participant, Error> {
        let participant = Participant {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            is_confirmed: data.is_confirmed,
            is_owner: data.is_owner,
            trip_id: data.trip_id,
        };

        sqlx::query(
            r#"
            INSERT INTO participants (id, name, email, is_confirmed, is_owner, trip_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(participant.id)
        .bind(&participant.name)
        .bind(&participant.email)
        .bind(participant.is_confirmed)
        .bind(participant.is_owner)
        .bind(participant.trip_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(participant)
    }
}

impl Read<Participant, Uuid> for ParticipantRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Participant>, Error> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, email, is_confirmed, is_owner, trip_id
            FROM participants
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(participant)
    }
}
