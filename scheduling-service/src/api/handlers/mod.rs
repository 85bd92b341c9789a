pub mod schedule_handlers;
pub mod swap_handlers;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use shared::DomainError;

pub use schedule_handlers::{
    archive_schedule, get_schedule_audit, get_schedule_result, get_schedule_status,
    publish_schedule, submit_schedule,
};
pub use swap_handlers::{admin_decide_swap, peer_decide_swap, request_swap};

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Maps a [`DomainError`] to its HTTP status, so every handler reports
/// failures consistently.
pub fn domain_error_response(error: DomainError) -> (StatusCode, String) {
    let status = match error {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::ConstraintViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::DatabaseError(_)
        | DomainError::ExternalServiceError(_)
        | DomainError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.to_string())
}
