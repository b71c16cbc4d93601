//! DAO route handlers.

use axum::{extract::State, http::StatusCode, Json};
use sde_core::dao::{Dao, DaoCreate};

use super::error_response;
use crate::state::AppState;

pub async fn list_daos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Dao>>, (StatusCode, String)> {
    let daos = sde_core::dao::list_daos(&state.store)
        .await
        .map_err(error_response)?;

    Ok(Json(daos))
}

pub async fn create_dao(
    State(state): State<AppState>,
    Json(input): Json<DaoCreate>,
) -> Result<(StatusCode, Json<Dao>), (StatusCode, String)> {
    let dao = sde_core::dao::create_dao(&state.store, input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(dao)))
}
