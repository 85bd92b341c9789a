pub mod batch_handlers;
pub mod member_handlers;
pub mod membership_handlers;
pub mod team_handlers;
pub mod unavailability_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
