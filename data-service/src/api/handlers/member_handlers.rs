use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use redis::AsyncCommands;
use shared::{ApiResponse, DomainError, PaginationParams};
use uuid::Uuid;

use crate::api::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::api::state::AppState;
use crate::domain::entities::MemberResponse;

const MEMBER_CACHE_TTL: u64 = 300;

/// Create a new member
#[utoipa::path(
    post,
    path = "/api/v1/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created successfully", body = ApiResponse<MemberResponse>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "members"
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let member = state
        .member_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del("member:list:*").await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Member created successfully",
            MemberResponse::from(member),
        )),
    ))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/api/v1/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member found", body = ApiResponse<MemberResponse>),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "members"
)]
pub async fn get_member_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = format!("member:id:{}", id);
    let mut redis_conn = state.redis_pool.clone();

    let cached: Result<String, _> = redis_conn.get(&cache_key).await;
    if let Ok(cached_data) = cached {
        if let Ok(response) = serde_json::from_str::<ApiResponse<MemberResponse>>(&cached_data) {
            return Ok((StatusCode::OK, Json(response)));
        }
    }

    let member = state
        .member_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Member not found".to_string()))?;

    let response = ApiResponse::success("Member retrieved successfully", MemberResponse::from(member));

    let _: Result<(), _> = redis_conn
        .set_ex(
            &cache_key,
            serde_json::to_string(&response).unwrap(),
            MEMBER_CACHE_TTL,
        )
        .await;

    Ok((StatusCode::OK, Json(response)))
}

/// List all members with pagination
#[utoipa::path(
    get,
    path = "/api/v1/members",
    params(PaginationParams),
    responses(
        (status = 200, description = "Member list", body = ApiResponse<Vec<MemberResponse>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "members"
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = format!("member:list:{}:{}", params.page, params.page_size);
    let mut redis_conn = state.redis_pool.clone();

    let cached: Result<String, _> = redis_conn.get(&cache_key).await;
    if let Ok(cached_data) = cached {
        if let Ok(response) =
            serde_json::from_str::<ApiResponse<Vec<MemberResponse>>>(&cached_data)
        {
            return Ok((StatusCode::OK, Json(response)));
        }
    }

    let (members, total) = state
        .member_repo
        .list(params.clone())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();

    let response = ApiResponse::with_total("Member list retrieved successfully", serialized, total);

    let _: Result<(), _> = redis_conn
        .set_ex(
            &cache_key,
            serde_json::to_string(&response).unwrap(),
            MEMBER_CACHE_TTL,
        )
        .await;

    Ok((StatusCode::OK, Json(response)))
}

/// Update member by ID
#[utoipa::path(
    put,
    path = "/api/v1/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated successfully", body = ApiResponse<MemberResponse>),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "members"
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let member = state
        .member_repo
        .update(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let cache_key = format!("member:id:{}", id);
    let _: Result<(), _> = redis_conn.del(&cache_key).await;
    let _: Result<(), _> = redis_conn.del("member:list:*").await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Member updated successfully",
            MemberResponse::from(member),
        )),
    ))
}

/// Deactivate member by ID (soft-delete, members are never hard-deleted)
#[utoipa::path(
    delete,
    path = "/api/v1/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deactivated successfully"),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "members"
)]
pub async fn deactivate_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .member_repo
        .deactivate(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let cache_key = format!("member:id:{}", id);
    let _: Result<(), _> = redis_conn.del(&cache_key).await;
    let _: Result<(), _> = redis_conn.del("member:list:*").await;

    Ok(StatusCode::NO_CONTENT)
}
