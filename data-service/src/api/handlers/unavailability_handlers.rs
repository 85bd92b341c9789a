use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::DomainError;
use uuid::Uuid;

use crate::api::requests::CreateUnavailablePeriodRequest;
use crate::api::state::AppState;
use crate::domain::entities::UnavailablePeriodResponse;

/// Record a new unavailability window for a member
#[utoipa::path(
    post,
    path = "/api/v1/unavailability",
    request_body = CreateUnavailablePeriodRequest,
    responses(
        (status = 201, description = "Unavailability window recorded", body = UnavailablePeriodResponse),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "unavailability"
)]
pub async fn create_unavailability(
    State(state): State<AppState>,
    Json(request): Json<CreateUnavailablePeriodRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let period = state
        .unavailability_repo
        .create(request)
        .await
        .map_err(|e| match e {
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(UnavailablePeriodResponse::from(period)),
    ))
}

/// Delete an unavailability window
#[utoipa::path(
    delete,
    path = "/api/v1/unavailability/{id}",
    params(
        ("id" = Uuid, Path, description = "Unavailability window ID")
    ),
    responses(
        (status = 204, description = "Unavailability window deleted"),
        (status = 404, description = "Unavailability window not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "unavailability"
)]
pub async fn delete_unavailability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .unavailability_repo
        .delete(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// List unavailability windows for a member that overlap a date range
#[utoipa::path(
    get,
    path = "/api/v1/members/{member_id}/unavailability",
    params(
        ("member_id" = Uuid, Path, description = "Member ID"),
        ("range_start" = chrono::NaiveDate, Query, description = "Range start (inclusive)"),
        ("range_end" = chrono::NaiveDate, Query, description = "Range end (inclusive)")
    ),
    responses(
        (status = 200, description = "Overlapping unavailability windows", body = Vec<UnavailablePeriodResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "unavailability"
)]
pub async fn list_unavailability_for_member(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
    axum::extract::Query(range): axum::extract::Query<DateRangeQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let periods = state
        .unavailability_repo
        .find_overlapping(member_id, range.range_start, range.range_end)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let response: Vec<UnavailablePeriodResponse> = periods
        .into_iter()
        .map(UnavailablePeriodResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

#[derive(Debug, serde::Deserialize)]
pub struct DateRangeQuery {
    pub range_start: chrono::NaiveDate,
    pub range_end: chrono::NaiveDate,
}
