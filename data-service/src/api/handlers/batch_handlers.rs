use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use shared::{cache_keys, invalidate_cache_pattern, ApiResponse};
use utoipa::ToSchema;

use crate::api::requests::{CreateMemberRequest, CreateTeamRequest};
use crate::api::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchImportResponse {
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchImportMembersRequest {
    pub members: Vec<CreateMemberRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchImportTeamsRequest {
    pub teams: Vec<CreateTeamRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchMembershipEntry {
    pub member_id: uuid::Uuid,
    pub team_id: uuid::Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchImportMembershipsRequest {
    pub memberships: Vec<BatchMembershipEntry>,
}

/// Bulk-create members in a single request, useful for seeding a team
/// before the first scheduling run.
#[utoipa::path(
    post,
    path = "/api/v1/batch/members",
    request_body = BatchImportMembersRequest,
    responses(
        (status = 200, description = "Batch import completed", body = ApiResponse<BatchImportResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "batch"
)]
pub async fn batch_import_members(
    State(state): State<AppState>,
    Json(request): Json<BatchImportMembersRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let create_futures: Vec<_> = request
        .members
        .into_iter()
        .map(|member_request| {
            let repo = state.member_repo.clone();
            async move { repo.create(member_request).await }
        })
        .collect();

    let results = join_all(create_futures).await;

    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => {
                error_count += 1;
                errors.push(e.to_string());
            }
        }
    }

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis::AsyncCommands::del(&mut redis_conn, "member:list:*").await;

    let data = BatchImportResponse {
        success_count,
        error_count,
        errors,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Batch member import completed", data)),
    ))
}

/// Bulk-create teams in a single request. Teams referencing a `parent_id`
/// that has not been created yet in the same batch are reported as errors;
/// submit parents in a prior batch or a separate update call.
#[utoipa::path(
    post,
    path = "/api/v1/batch/teams",
    request_body = BatchImportTeamsRequest,
    responses(
        (status = 200, description = "Batch import completed", body = ApiResponse<BatchImportResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "batch"
)]
pub async fn batch_import_teams(
    State(state): State<AppState>,
    Json(request): Json<BatchImportTeamsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for team_request in request.teams {
        let name = team_request.name.clone();
        match state.team_repo.create(team_request).await {
            Ok(_) => success_count += 1,
            Err(e) => {
                error_count += 1;
                errors.push(format!("Failed to create team '{}': {}", name, e));
            }
        }
    }

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache_pattern(&mut redis_conn, cache_keys::RESOLVED_MEMBERS_PATTERN).await;

    let data = BatchImportResponse {
        success_count,
        error_count,
        errors,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Batch team import completed", data)),
    ))
}

/// Bulk-attach members to teams in a single request.
#[utoipa::path(
    post,
    path = "/api/v1/batch/memberships",
    request_body = BatchImportMembershipsRequest,
    responses(
        (status = 200, description = "Batch import completed", body = ApiResponse<BatchImportResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "batch"
)]
pub async fn batch_import_memberships(
    State(state): State<AppState>,
    Json(request): Json<BatchImportMembershipsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for entry in request.memberships {
        match state
            .membership_repo
            .add_member(entry.member_id, entry.team_id)
            .await
        {
            Ok(_) => success_count += 1,
            Err(e) => {
                error_count += 1;
                errors.push(format!(
                    "Failed to add member {} to team {}: {}",
                    entry.member_id, entry.team_id, e
                ));
            }
        }
    }

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache_pattern(&mut redis_conn, cache_keys::RESOLVED_MEMBERS_PATTERN).await;

    let data = BatchImportResponse {
        success_count,
        error_count,
        errors,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Batch membership import completed",
            data,
        )),
    ))
}
