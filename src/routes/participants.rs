use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::AppError, models::participant::Participant, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/:id/confirm", post(confirm_participant))
}

#[derive(Deserialize)]
struct ConfirmPayload {
    name: String,
}

async fn confirm_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    Json(payload): Json<ConfirmPayload>,
) -> Result<Json<Participant>, AppError> {
    let participant = state
        .participants
        .confirm(participant_id, &payload.name)
        .await?;
    Ok(Json(participant))
}
