//! Class route handlers.

use axum::{extract::State, http::StatusCode, Json};
use sde_core::class::{Class, ClassCreate};

use super::error_response;
use crate::state::AppState;

pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, (StatusCode, String)> {
    let classes = sde_core::class::list_classes(&state.store)
        .await
        .map_err(error_response)?;

    Ok(Json(classes))
}

pub async fn create_class(
    State(state): State<AppState>,
    Json(input): Json<ClassCreate>,
) -> Result<(StatusCode, Json<Class>), (StatusCode, String)> {
    let class = sde_core::class::create_class(&state.store, input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(class)))
}
