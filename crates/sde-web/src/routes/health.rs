//! Health route handler.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Sequence Editor Backend";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn index() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}
