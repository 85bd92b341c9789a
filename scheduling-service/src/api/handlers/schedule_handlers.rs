use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use shared::{cache_keys, cache_ttl, get_cached, invalidate_cache, DomainError, JobStatus, ScheduleStatus};
use utoipa::ToSchema;
use uuid::Uuid;

use super::domain_error_response;
use crate::api::requests::CreateScheduleRequest;
use crate::api::state::AppState;
use crate::domain::entities::{AssignmentResponse, AuditEntryResponse, ScheduleResponse};
use crate::infrastructure::ScheduleGenerationRequest;

/// Accept a generation request and dispatch it to the background
/// runner: `202 Accepted` plus poll-for-status. Rejects with `409` if
/// another generation for the same team is already in flight (spec.md
/// §5's "at most one in-flight generation per team" contract) — the
/// caller may retry once that generation completes.
#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 202, description = "Schedule generation accepted", body = GenerationAcceptedResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "A generation for this team is already in flight"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn submit_schedule(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if request.end_date < request.start_date {
        return Err((
            StatusCode::BAD_REQUEST,
            "end_date must not precede start_date".to_string(),
        ));
    }

    let aggressiveness = request
        .fairness_aggressiveness
        .unwrap_or(state.config.default_aggressiveness);
    if !(1..=5).contains(&aggressiveness) {
        return Err((
            StatusCode::BAD_REQUEST,
            "fairness_aggressiveness must be between 1 and 5".to_string(),
        ));
    }

    if !state.team_locks.try_acquire(request.team_id).await {
        return Err(domain_error_response(DomainError::Conflict(format!(
            "a generation for team {} is already in flight",
            request.team_id
        ))));
    }

    let schedule_id = Uuid::new_v4();
    let seed = request.seed.unwrap_or_else(|| schedule_id.as_u128() as u64);

    state.jobs.set(schedule_id, JobStatus::Pending, None).await;

    if let Err(e) = state
        .generation_sender
        .send(ScheduleGenerationRequest {
            schedule_id,
            team_id: request.team_id,
            start_date: request.start_date,
            end_date: request.end_date,
            seed,
            fairness_aggressiveness: aggressiveness,
        })
        .await
    {
        state.team_locks.release(request.team_id).await;
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to submit generation job: {}", e),
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(GenerationAcceptedResponse {
            schedule_id,
            status: JobStatus::Pending,
        }),
    ))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationAcceptedResponse {
    pub schedule_id: Uuid,
    pub status: JobStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationStatusResponse {
    pub schedule_id: Uuid,
    pub status: JobStatus,
    pub error: Option<String>,
}

/// Poll the in-flight job, falling back to a persisted `Schedule` for
/// generations completed before this process's in-memory job map was
/// populated (e.g. after a restart).
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{schedule_id}/status",
    params(("schedule_id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Generation status", body = GenerationStatusResponse),
        (status = 404, description = "Unknown schedule id")
    ),
    tag = "schedules"
)]
pub async fn get_schedule_status(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Some((status, error)) = state.jobs.get(schedule_id).await {
        return Ok((
            StatusCode::OK,
            Json(GenerationStatusResponse {
                schedule_id,
                status,
                error,
            }),
        ));
    }

    let schedule = state
        .schedule_repo
        .find_by_id(schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    let _ = schedule;
    Ok((
        StatusCode::OK,
        Json(GenerationStatusResponse {
            schedule_id,
            status: JobStatus::Completed,
            error: None,
        }),
    ))
}

#[derive(Debug, Serialize, serde::Deserialize, ToSchema)]
pub struct ScheduleResultResponse {
    #[serde(flatten)]
    pub schedule: ScheduleResponse,
    pub assignments: Vec<AssignmentResponse>,
}

/// Returns the persisted schedule plus its assignments.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{schedule_id}",
    params(("schedule_id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule and assignments", body = ScheduleResultResponse),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules"
)]
pub async fn get_schedule_result(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = cache_keys::schedule_result(schedule_id);
    let mut redis_conn = state.redis_pool.clone();

    if let Some(response) = get_cached::<ScheduleResultResponse>(&mut redis_conn, &cache_key).await {
        return Ok((StatusCode::OK, Json(response)));
    }

    let schedule = state
        .schedule_repo
        .find_by_id(schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    let assignments = state
        .assignment_repo
        .find_by_schedule_id(schedule_id)
        .await
        .map_err(domain_error_response)?;

    let audit_entries = state
        .audit_log_repo
        .find_by_schedule_id(schedule_id)
        .await
        .map_err(domain_error_response)?;

    let warnings: Vec<String> = audit_entries
        .into_iter()
        .flat_map(|entry| entry.warnings.0)
        .collect();

    let response = ScheduleResultResponse {
        schedule: ScheduleResponse::new(schedule, warnings),
        assignments: assignments.into_iter().map(AssignmentResponse::from).collect(),
    };

    // A schedule's assignments only change via publish/archive/swap, each of
    // which invalidates this key, so caching the result here is safe even
    // for draft schedules.
    shared::set_cached(&mut redis_conn, &cache_key, &response, cache_ttl::SCHEDULE_RESULT).await;

    Ok((StatusCode::OK, Json(response)))
}

/// Returns the audit log rows for one schedule: every candidate
/// considered per decision, for dispute resolution.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{schedule_id}/audit",
    params(("schedule_id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Audit entries", body = [AuditEntryResponse]),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules"
)]
pub async fn get_schedule_audit(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .schedule_repo
        .find_by_id(schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    let entries = state
        .audit_log_repo
        .find_by_schedule_id(schedule_id)
        .await
        .map_err(domain_error_response)?;

    let response: Vec<AuditEntryResponse> = entries.into_iter().map(AuditEntryResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

/// Transitions a draft schedule to published, one-way; publishing is
/// what makes its assignments swappable.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/{schedule_id}/publish",
    params(("schedule_id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule published", body = ScheduleResponse),
        (status = 404, description = "Schedule not found"),
        (status = 422, description = "Schedule is not in a publishable state")
    ),
    tag = "schedules"
)]
pub async fn publish_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let schedule = state
        .schedule_repo
        .find_by_id(schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    if !schedule.can_transition_to(ScheduleStatus::Published) {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "schedule-lifecycle".to_string(),
            detail: format!("cannot publish a schedule in state {:?}", schedule.status),
        }));
    }

    let updated = state
        .schedule_repo
        .update_status(schedule_id, ScheduleStatus::Published)
        .await
        .map_err(domain_error_response)?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::schedule_result(schedule_id)).await;

    Ok((StatusCode::OK, Json(ScheduleResponse::new(updated, vec![]))))
}

/// Transitions a published schedule to archived, one-way; archived
/// schedules are read-only (no further swaps), though their assignments
/// still participate in the fairness window per spec.md §9.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/{schedule_id}/archive",
    params(("schedule_id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule archived", body = ScheduleResponse),
        (status = 404, description = "Schedule not found"),
        (status = 422, description = "Schedule is not in an archivable state")
    ),
    tag = "schedules"
)]
pub async fn archive_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let schedule = state
        .schedule_repo
        .find_by_id(schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    if !schedule.can_transition_to(ScheduleStatus::Archived) {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "schedule-lifecycle".to_string(),
            detail: format!("cannot archive a schedule in state {:?}", schedule.status),
        }));
    }

    let updated = state
        .schedule_repo
        .update_status(schedule_id, ScheduleStatus::Archived)
        .await
        .map_err(domain_error_response)?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::schedule_result(schedule_id)).await;

    Ok((StatusCode::OK, Json(ScheduleResponse::new(updated, vec![]))))
}
