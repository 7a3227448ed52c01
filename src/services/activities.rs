use tracing::info;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        activity::{Activity, ActivityData},
        trip::Trip,
    },
    time_utils::parse_date_time,
};

#[derive(Clone)]
pub struct ActivityService {
    db: DbPool,
}

impl ActivityService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn register(
        &self,
        title: &str,
        occurs_at: &str,
        trip: &Trip,
    ) -> Result<Uuid, AppError> {
        let occurs_at = parse_date_time("occurs_at", occurs_at)?;
        let activity = Activity::new(title, occurs_at, trip.id);
        sqlx::query(
            "INSERT INTO activities (id, trip_id, title, occurs_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(activity.id)
        .bind(activity.trip_id)
        .bind(&activity.title)
        .bind(activity.occurs_at)
        .execute(&self.db)
        .await?;
        info!(trip_id = %trip.id, activity_id = %activity.id, "activity added");
        Ok(activity.id)
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<ActivityData>, AppError> {
        let items = sqlx::query_as::<_, ActivityData>(
            "SELECT id, title, occurs_at FROM activities WHERE trip_id = ?1 ORDER BY rowid",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(items)
    }
}
