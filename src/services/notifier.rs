use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    error::AppError,
    models::{participant::ParticipantData, trip::Trip},
};

/// Delivery of trip confirmation notices to participants.
///
/// Implementations return the addresses that were notified, exactly as they
/// were stored. Callers treat delivery as fire-and-forget.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn trip_confirmed(
        &self,
        trip: &Trip,
        participants: &[ParticipantData],
    ) -> Result<Vec<String>, AppError>;

    async fn participant_invited(&self, trip: &Trip, email: &str)
        -> Result<Vec<String>, AppError>;
}

/// Default notifier: sends nothing, only logs who would have been reached.
#[derive(Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn trip_confirmed(
        &self,
        trip: &Trip,
        participants: &[ParticipantData],
    ) -> Result<Vec<String>, AppError> {
        let recipients: Vec<String> = participants.iter().map(|p| p.email.clone()).collect();
        if recipients.is_empty() {
            warn!(trip_id = %trip.id, "trip confirmed without anyone to notify");
        } else {
            info!(trip_id = %trip.id, targets = ?recipients, "confirmation notice skipped: no mailer configured");
        }
        Ok(recipients)
    }

    async fn participant_invited(
        &self,
        trip: &Trip,
        email: &str,
    ) -> Result<Vec<String>, AppError> {
        let recipients = vec![email.to_string()];
        info!(trip_id = %trip.id, targets = ?recipients, "invite notice skipped: no mailer configured");
        Ok(recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn trip() -> Trip {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Trip::new("Paris", at, at)
    }

    fn participant(email: &str) -> ParticipantData {
        ParticipantData {
            id: Uuid::new_v4(),
            name: String::new(),
            email: email.into(),
            is_confirmed: false,
        }
    }

    #[tokio::test]
    async fn confirmation_reaches_every_participant_as_stored() {
        let notified = LogNotifier::new()
            .trip_confirmed(
                &trip(),
                &[participant("a@x.com"), participant(" b@x.com ")],
            )
            .await
            .unwrap();
        assert_eq!(notified, vec!["a@x.com".to_string(), " b@x.com ".to_string()]);
    }

    #[tokio::test]
    async fn confirmation_without_participants_notifies_nobody() {
        let notified = LogNotifier::new().trip_confirmed(&trip(), &[]).await.unwrap();
        assert!(notified.is_empty());
    }

    #[tokio::test]
    async fn invite_notifies_single_address() {
        let notified = LogNotifier::new()
            .participant_invited(&trip(), "c@x.com")
            .await
            .unwrap();
        assert_eq!(notified, vec!["c@x.com".to_string()]);
    }
}
