use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub is_confirmed: bool,
    pub is_planned: bool,
}

impl Trip {
    pub fn new(
        destination: impl Into<String>,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination: destination.into(),
            starts_at,
            ends_at,
            is_confirmed: false,
            is_planned: false,
        }
    }
}
