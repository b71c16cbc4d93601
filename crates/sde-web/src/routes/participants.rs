//! Participant route handlers.

use axum::{extract::State, http::StatusCode, Json};
use sde_core::participant::{Participant, ParticipantCreate};

use super::error_response;
use crate::state::AppState;

pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Participant>>, (StatusCode, String)> {
    let participants = sde_core::participant::list_participants(&state.store)
        .await
        .map_err(error_response)?;

    Ok(Json(participants))
}

pub async fn create_participant(
    State(state): State<AppState>,
    Json(input): Json<ParticipantCreate>,
) -> Result<(StatusCode, Json<Participant>), (StatusCode, String)> {
    let participant = sde_core::participant::create_participant(&state.store, input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(participant)))
}
