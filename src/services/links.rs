use tracing::info;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        link::{Link, LinkData},
        trip::Trip,
    },
};

#[derive(Clone)]
pub struct LinkService {
    db: DbPool,
}

impl LinkService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// The url is stored as given; it is not checked for well-formedness.
    pub async fn register(&self, title: &str, url: &str, trip: &Trip) -> Result<Uuid, AppError> {
        let link = Link::new(title, url, trip.id);
        sqlx::query("INSERT INTO links (id, trip_id, title, url) VALUES (?1, ?2, ?3, ?4)")
            .bind(link.id)
            .bind(link.trip_id)
            .bind(&link.title)
            .bind(&link.url)
            .execute(&self.db)
            .await?;
        info!(trip_id = %trip.id, link_id = %link.id, "link added");
        Ok(link.id)
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<LinkData>, AppError> {
        let items = sqlx::query_as::<_, LinkData>(
            "SELECT id, title, url FROM links WHERE trip_id = ?1 ORDER BY rowid",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(items)
    }
}
