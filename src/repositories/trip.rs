//! TripRepository - Repository per la gestione dei viaggi

use super::{Create, Read};
use crate::dtos::CreateTripDTO;
use crate::entities::Trip;
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct TripRepository {
    connection_pool: SqlitePool,
}

impl TripRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Trip, CreateTripDTO> for TripRepository {
    /// Crea il viaggio, l'owner (già confermato) e un partecipante in attesa per ogni email
    /// invitata, tutto nella stessa transazione.
    async fn create(&self, data: &CreateTripDTO) -> Result<Trip, Error> {
        let trip = Trip {
            id: Uuid::new_v4(),
            destination: data.destination.clone(),
            starts_at: data.starts_at,
            ends_at: data.ends_at,
            is_confirmed: false,
            created_at: Utc::now(),
        };

        let mut tx = self.connection_pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.id)
        .bind(&trip.destination)
        .bind(trip.starts_at)
        .bind(trip.ends_at)
        .bind(trip.is_confirmed)
        .bind(trip.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO participants (id, name, email, is_confirmed, is_owner, trip_id)
            VALUES (?, ?, ?, TRUE, TRUE, ?)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.owner_name)
        .bind(&data.owner_email)
        .bind(trip.id)
        .execute(&mut *tx)
        .await?;

        for email in &data.emails_to_invite {
            sqlx::query(
                r#"
                INSERT INTO participants (id, name, email, is_confirmed, is_owner, trip_id)
                VALUES (?, NULL, ?, FALSE, FALSE, ?)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(trip.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(trip)
    }
}

impl Read<Trip, Uuid> for TripRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Trip>, Error> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, destination, starts_at, ends_at, is_confirmed, created_at
            FROM trips
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(trip)
    }
}
