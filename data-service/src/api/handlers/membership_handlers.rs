use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use redis::AsyncCommands;
use shared::DomainError;
use uuid::Uuid;

use crate::api::requests::AddMemberRequest;
use crate::api::state::AppState;
use crate::domain::entities::MemberResponse;
use crate::presentation::MembershipSerializer;

/// Add a member to a team
#[utoipa::path(
    post,
    path = "/api/v1/teams/{team_id}/members",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added successfully", body = MembershipSerializer),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn add_member(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let membership = state
        .membership_repo
        .add_member(request.member_id, team_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del(format!("team:resolved:{}", team_id)).await;

    Ok((
        StatusCode::CREATED,
        Json(MembershipSerializer::from(membership)),
    ))
}

/// Remove a member from a team
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/members/{member_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("member_id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member removed successfully"),
        (status = 404, description = "Membership not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn remove_member(
    State(state): State<AppState>,
    Path((team_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .membership_repo
        .remove_member(member_id, team_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del(format!("team:resolved:{}", team_id)).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get all direct members of a team (not resolved through sub-teams)
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}/members",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team members", body = Vec<MemberResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let members = state
        .member_repo
        .find_by_team_id(team_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let response: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}
