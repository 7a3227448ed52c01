use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{activity::ActivityData, link::LinkData, participant::ParticipantData, trip::Trip},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/:id", get(trip_details).put(update_trip))
        .route("/:id/confirm", get(confirm_trip))
        .route("/:id/invite", post(invite_participant))
        .route("/:id/participants", get(participants_list))
        .route("/:id/activities", get(activities_list).post(add_activity))
        .route("/:id/links", get(links_list).post(add_link))
}

#[derive(Deserialize)]
struct TripPayload {
    destination: String,
    starts_at: String,
    ends_at: String,
    #[serde(default)]
    emails_to_invite: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TripCreated {
    trip_id: Uuid,
}

async fn create_trip(
    State(state): State<AppState>,
    Json(payload): Json<TripPayload>,
) -> Result<Json<TripCreated>, AppError> {
    let trip_id = state
        .trips
        .create(
            &payload.destination,
            &payload.starts_at,
            &payload.ends_at,
            &payload.emails_to_invite,
        )
        .await?;
    Ok(Json(TripCreated { trip_id }))
}

async fn trip_details(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.get(trip_id).await?))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(payload): Json<TripPayload>,
) -> Result<Json<Trip>, AppError> {
    let trip = state
        .trips
        .update(
            trip_id,
            &payload.destination,
            &payload.starts_at,
            &payload.ends_at,
        )
        .await?;
    Ok(Json(trip))
}

async fn confirm_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.confirm(trip_id).await?))
}

#[derive(Deserialize)]
struct InvitePayload {
    email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantCreated {
    participant_id: Uuid,
}

async fn invite_participant(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(payload): Json<InvitePayload>,
) -> Result<Json<ParticipantCreated>, AppError> {
    let participant_id = state.trips.invite(trip_id, &payload.email).await?;
    Ok(Json(ParticipantCreated { participant_id }))
}

async fn participants_list(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Vec<ParticipantData>>, AppError> {
    Ok(Json(state.trips.list_participants(trip_id).await?))
}

#[derive(Deserialize)]
struct ActivityPayload {
    title: String,
    occurs_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityCreated {
    activity_id: Uuid,
}

async fn add_activity(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<ActivityCreated>, AppError> {
    let activity_id = state
        .trips
        .add_activity(trip_id, &payload.title, &payload.occurs_at)
        .await?;
    Ok(Json(ActivityCreated { activity_id }))
}

async fn activities_list(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Vec<ActivityData>>, AppError> {
    Ok(Json(state.trips.list_activities(trip_id).await?))
}

#[derive(Deserialize)]
struct LinkPayload {
    title: String,
    url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkCreated {
    link_id: Uuid,
}

async fn add_link(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(payload): Json<LinkPayload>,
) -> Result<Json<LinkCreated>, AppError> {
    let link_id = state
        .trips
        .add_link(trip_id, &payload.title, &payload.url)
        .await?;
    Ok(Json(LinkCreated { link_id }))
}

async fn links_list(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Vec<LinkData>>, AppError> {
    Ok(Json(state.trips.list_links(trip_id).await?))
}
