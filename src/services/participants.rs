use sqlx::SqliteConnection;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        participant::{Participant, ParticipantData},
        trip::Trip,
    },
};

#[derive(Clone)]
pub struct ParticipantService {
    db: DbPool,
}

impl ParticipantService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Invite every address in one transaction; one failed insert rolls back the batch.
    /// Duplicate addresses are stored as separate participants.
    pub async fn register_many(
        &self,
        emails: &[String],
        trip: &Trip,
    ) -> Result<Vec<Uuid>, AppError> {
        let mut tx = self.db.begin().await?;
        let ids = insert_invitees(&mut tx, emails, trip).await?;
        tx.commit().await?;
        Ok(ids)
    }

    pub async fn register_one(&self, email: &str, trip: &Trip) -> Result<Uuid, AppError> {
        let participant = Participant::new(email, trip.id);
        let mut conn = self.db.acquire().await?;
        insert(&mut conn, &participant).await?;
        info!(trip_id = %trip.id, participant_id = %participant.id, "participant invited");
        Ok(participant.id)
    }

    pub async fn find(&self, participant_id: Uuid) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, trip_id, email, name, is_confirmed FROM participants WHERE id = ?1",
        )
        .bind(participant_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)
    }

    /// Sets the name and the confirmation flag in a single statement.
    pub async fn confirm(&self, participant_id: Uuid, name: &str) -> Result<Participant, AppError> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"UPDATE participants SET name = ?1, is_confirmed = 1 WHERE id = ?2
               RETURNING id, trip_id, email, name, is_confirmed"#,
        )
        .bind(name)
        .bind(participant_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)?;
        info!(participant_id = %participant.id, trip_id = %participant.trip_id, "participant confirmed");
        Ok(participant)
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<ParticipantData>, AppError> {
        let items = sqlx::query_as::<_, ParticipantData>(
            "SELECT id, name, email, is_confirmed FROM participants WHERE trip_id = ?1 ORDER BY rowid",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(items)
    }
}

/// Insert one unconfirmed participant per address on an open connection or transaction.
pub(crate) async fn insert_invitees(
    conn: &mut SqliteConnection,
    emails: &[String],
    trip: &Trip,
) -> Result<Vec<Uuid>, AppError> {
    let mut ids = Vec::with_capacity(emails.len());
    for email in emails {
        let participant = Participant::new(email.as_str(), trip.id);
        insert(conn, &participant).await?;
        ids.push(participant.id);
    }
    if !ids.is_empty() {
        info!(trip_id = %trip.id, count = ids.len(), "participants invited");
    }
    Ok(ids)
}

async fn insert(conn: &mut SqliteConnection, participant: &Participant) -> Result<(), AppError> {
    sqlx::query(
        r#"INSERT INTO participants (id, trip_id, email, name, is_confirmed)
           VALUES (?1, ?2, ?3, ?4, ?5)"#,
    )
    .bind(participant.id)
    .bind(participant.trip_id)
    .bind(&participant.email)
    .bind(&participant.name)
    .bind(participant.is_confirmed)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
