use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::future::try_join_all;
use shared::{
    cache_keys, cache_ttl, get_cached, invalidate_cache, set_cached, ApiResponse, DomainError,
    PaginationParams,
};
use uuid::Uuid;

use crate::api::requests::{CreateTeamRequest, UpdateTeamRequest};
use crate::api::state::AppState;
use crate::domain::entities::{MemberResponse, Team};
use crate::presentation::TeamSerializer;

async fn resolve_parent_name(
    state: &AppState,
    team: &Team,
) -> Result<Option<String>, (StatusCode, String)> {
    if let Some(parent_id) = team.parent_id {
        let parent = state
            .team_repo
            .find_by_id(parent_id)
            .await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        Ok(parent.map(|p| p.name))
    } else {
        Ok(None)
    }
}

async fn to_team_serializer(
    state: &AppState,
    team: Team,
) -> Result<TeamSerializer, (StatusCode, String)> {
    let parent_name = resolve_parent_name(state, &team).await?;
    Ok(TeamSerializer::new(team, parent_name))
}

#[utoipa::path(
    post,
    path = "/api/v1/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = ApiResponse<TeamSerializer>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let team = state
        .team_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serializer = to_team_serializer(&state, team).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Team created successfully", serializer)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = ApiResponse<TeamSerializer>),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let team = state
        .team_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Team not found".to_string()))?;

    let serializer = to_team_serializer(&state, team).await?;
    let response = ApiResponse::success("Team retrieved successfully", serializer);

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams",
    params(PaginationParams),
    responses(
        (status = 200, description = "Team list", body = ApiResponse<Vec<TeamSerializer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (teams, total) = state
        .team_repo
        .list(params.clone())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serializer_futures: Vec<_> = teams
        .into_iter()
        .map(|team| to_team_serializer(&state, team))
        .collect();

    let serialized = try_join_all(serializer_futures).await?;

    let response = ApiResponse::with_total("Team list retrieved successfully", serialized, total);

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated successfully", body = ApiResponse<TeamSerializer>),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let team = state
        .team_repo
        .update(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(id)).await;

    let serializer = to_team_serializer(&state, team).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Team updated successfully", serializer)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.team_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(id)).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a team down to its flat, active membership, including members
/// reachable through nested sub-teams.
#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}/resolved-members",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Resolved active members", body = ApiResponse<Vec<MemberResponse>>),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
pub async fn get_resolved_members(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .team_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("Team with id {} not found", id),
        ))?;

    let cache_key = cache_keys::resolved_members(id);
    let mut redis_conn = state.redis_pool.clone();

    if let Some(response) =
        get_cached::<ApiResponse<Vec<MemberResponse>>>(&mut redis_conn, &cache_key).await
    {
        return Ok((StatusCode::OK, Json(response)));
    }

    let members = state
        .member_directory
        .get_resolved_members(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let total = members.len() as u64;
    let serialized: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();

    let response = ApiResponse::with_total(
        "Resolved members retrieved successfully",
        serialized,
        total,
    );

    set_cached(
        &mut redis_conn,
        &cache_key,
        &response,
        cache_ttl::RESOLVED_MEMBERS,
    )
    .await;

    Ok((StatusCode::OK, Json(response)))
}
