//! Route handlers.

pub mod classes;
pub mod daos;
pub mod health;
pub mod packages;
pub mod participants;

use axum::http::StatusCode;
use sde_core::SdeError;

/// Map a core error to an HTTP status and message.
///
/// Validation failures are the client's fault; everything else (store
/// unreachable, query failure, empty create result) is a server error.
pub(crate) fn error_response(err: SdeError) -> (StatusCode, String) {
    let status = match err {
        SdeError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
