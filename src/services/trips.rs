use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{activity::ActivityData, link::LinkData, participant::ParticipantData, trip::Trip},
    time_utils::parse_date_time,
};

use super::{
    activities::ActivityService,
    links::LinkService,
    notifier::Notifier,
    participants::{self, ParticipantService},
};

/// Owns the trip lifecycle and hands sub-resources to their managers.
#[derive(Clone)]
pub struct TripService {
    db: DbPool,
    participants: ParticipantService,
    activities: ActivityService,
    links: LinkService,
    notifier: Arc<dyn Notifier>,
}

impl TripService {
    pub fn new(db: DbPool, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            participants: ParticipantService::new(db.clone()),
            activities: ActivityService::new(db.clone()),
            links: LinkService::new(db.clone()),
            db,
            notifier,
        }
    }

    pub fn participants(&self) -> &ParticipantService {
        &self.participants
    }

    /// Stores a new unconfirmed trip together with its invitees.
    pub async fn create(
        &self,
        destination: &str,
        starts_at: &str,
        ends_at: &str,
        emails_to_invite: &[String],
    ) -> Result<Uuid, AppError> {
        let trip = Trip::new(
            destination,
            parse_date_time("starts_at", starts_at)?,
            parse_date_time("ends_at", ends_at)?,
        );

        let mut tx = self.db.begin().await?;
        sqlx::query(
            r#"INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, is_planned)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(trip.id)
        .bind(&trip.destination)
        .bind(trip.starts_at)
        .bind(trip.ends_at)
        .bind(trip.is_confirmed)
        .bind(trip.is_planned)
        .execute(&mut *tx)
        .await?;
        participants::insert_invitees(&mut tx, emails_to_invite, &trip).await?;
        tx.commit().await?;

        info!(trip_id = %trip.id, destination = %trip.destination, "trip created");
        Ok(trip.id)
    }

    pub async fn get(&self, trip_id: Uuid) -> Result<Trip, AppError> {
        sqlx::query_as::<_, Trip>(
            r#"SELECT id, destination, starts_at, ends_at, is_confirmed, is_planned
               FROM trips WHERE id = ?1"#,
        )
        .bind(trip_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)
    }

    /// Overwrites destination and dates; confirmation state is left alone.
    pub async fn update(
        &self,
        trip_id: Uuid,
        destination: &str,
        starts_at: &str,
        ends_at: &str,
    ) -> Result<Trip, AppError> {
        let starts_at = parse_date_time("starts_at", starts_at)?;
        let ends_at = parse_date_time("ends_at", ends_at)?;
        let trip = sqlx::query_as::<_, Trip>(
            r#"UPDATE trips SET destination = ?1, starts_at = ?2, ends_at = ?3 WHERE id = ?4
               RETURNING id, destination, starts_at, ends_at, is_confirmed, is_planned"#,
        )
        .bind(destination)
        .bind(starts_at)
        .bind(ends_at)
        .bind(trip_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)?;
        info!(trip_id = %trip.id, "trip updated");
        Ok(trip)
    }

    /// Marks the trip confirmed and notifies every participant. Repeat calls are harmless.
    pub async fn confirm(&self, trip_id: Uuid) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"UPDATE trips SET is_confirmed = 1 WHERE id = ?1
               RETURNING id, destination, starts_at, ends_at, is_confirmed, is_planned"#,
        )
        .bind(trip_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)?;
        info!(trip_id = %trip.id, "trip confirmed");

        let participants = match self.participants.list_by_trip(trip.id).await {
            Ok(participants) => participants,
            Err(err) => {
                warn!(trip_id = %trip.id, "participants for confirmation notices unavailable: {err}");
                return Ok(trip);
            }
        };
        if let Err(err) = self.notifier.trip_confirmed(&trip, &participants).await {
            warn!(trip_id = %trip.id, "confirmation notices failed: {err}");
        }
        Ok(trip)
    }

    pub async fn invite(&self, trip_id: Uuid, email: &str) -> Result<Uuid, AppError> {
        let trip = self.get(trip_id).await?;
        let participant_id = self.participants.register_one(email, &trip).await?;
        if trip.is_confirmed {
            if let Err(err) = self.notifier.participant_invited(&trip, email).await {
                warn!(trip_id = %trip.id, participant_id = %participant_id, "invite notice failed: {err}");
            }
        }
        Ok(participant_id)
    }

    pub async fn list_participants(&self, trip_id: Uuid) -> Result<Vec<ParticipantData>, AppError> {
        self.participants.list_by_trip(trip_id).await
    }

    pub async fn add_activity(
        &self,
        trip_id: Uuid,
        title: &str,
        occurs_at: &str,
    ) -> Result<Uuid, AppError> {
        let trip = self.get(trip_id).await?;
        self.activities.register(title, occurs_at, &trip).await
    }

    pub async fn list_activities(&self, trip_id: Uuid) -> Result<Vec<ActivityData>, AppError> {
        self.activities.list_by_trip(trip_id).await
    }

    pub async fn add_link(&self, trip_id: Uuid, title: &str, url: &str) -> Result<Uuid, AppError> {
        let trip = self.get(trip_id).await?;
        self.links.register(title, url, &trip).await
    }

    pub async fn list_links(&self, trip_id: Uuid) -> Result<Vec<LinkData>, AppError> {
        self.links.list_by_trip(trip_id).await
    }
}
