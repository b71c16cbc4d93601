//! Package route handlers.

use axum::{extract::State, http::StatusCode, Json};
use sde_core::package::{Package, PackageCreate};

use super::error_response;
use crate::state::AppState;

pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Package>>, (StatusCode, String)> {
    let packages = sde_core::package::list_packages(&state.store)
        .await
        .map_err(error_response)?;

    Ok(Json(packages))
}

pub async fn create_package(
    State(state): State<AppState>,
    Json(input): Json<PackageCreate>,
) -> Result<(StatusCode, Json<Package>), (StatusCode, String)> {
    let package = sde_core::package::create_package(&state.store, input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(package)))
}
