use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub occurs_at: NaiveDateTime,
}

impl Activity {
    pub fn new(title: impl Into<String>, occurs_at: NaiveDateTime, trip_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id,
            title: title.into(),
            occurs_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ActivityData {
    pub id: Uuid,
    pub title: String,
    pub occurs_at: NaiveDateTime,
}
