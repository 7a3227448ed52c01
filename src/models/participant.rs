use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Participant {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub email: String,
    pub name: String,
    pub is_confirmed: bool,
}

impl Participant {
    /// A freshly invited participant: no name yet, not confirmed.
    pub fn new(email: impl Into<String>, trip_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id,
            email: email.into(),
            name: String::new(),
            is_confirmed: false,
        }
    }
}

/// Listing view of a participant, without the owning trip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ParticipantData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_confirmed: bool,
}
