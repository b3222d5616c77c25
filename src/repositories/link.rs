//! LinkRepository - Repository per la gestione dei link

use super::{Create, Read};
use crate::dtos::CreateLinkDTO;
use crate::entities::Link;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct LinkRepository {
    connection_pool: SqlitePool,
}

impl LinkRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_trip_id(&self, trip_id: &Uuid) -> Result<Vec<Link>, Error> {
        let links = sqlx::query_as::<_, Link>(
            "SELECT id, title, url, trip_id FROM links WHERE trip_id = ? ORDER BY title",
        )
        .bind(trip_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(links)
    }
}

impl Create<Link, CreateLinkDTO> for LinkRepository {
    async fn create(&self, data: &CreateLinkDTO) -> Result<Link, Error> {
        let link = Link {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            url: data.url.clone(),
            trip_id: data.trip_id,
        };

        sqlx::query("INSERT INTO links (id, title, url, trip_id) VALUES (?, ?, ?, ?)")
            .bind(link.id)
            .bind(&link.title)
            .bind(&link.url)
            .bind(link.trip_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(link)
    }
}

impl Read<Link, Uuid> for LinkRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Link>, Error> {
        let link = sqlx::query_as::<_, Link>("SELECT id, title, url, trip_id FROM links WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(link)
    }
}
