use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use shared::{AssignmentStatus, DomainError, SwapAdminDecision, SwapPeerDecision, TaskKind};
use std::collections::HashSet;
use uuid::Uuid;

use super::domain_error_response;
use crate::api::requests::{AdminDecisionRequest, CreateSwapRequest, PeerDecisionRequest};
use crate::api::state::AppState;
use crate::domain::engine::eligibility::RestCooldownMap;
use crate::domain::engine::ledger::FairnessLedger;
use crate::domain::engine::swap_validator;
use crate::domain::engine::time::week_bucket;
use crate::domain::engine::availability::AvailabilityStore;
use crate::domain::entities::{FairnessCount, Swap, SwapResponse};

/// Opens a swap request against an active assignment. Both
/// `peer_decision` and `admin_decision` start pending.
#[utoipa::path(
    post,
    path = "/api/v1/swaps",
    request_body = CreateSwapRequest,
    responses(
        (status = 201, description = "Swap request created", body = SwapResponse),
        (status = 404, description = "Assignment not found")
    ),
    tag = "swaps"
)]
pub async fn request_swap(
    State(state): State<AppState>,
    Json(request): Json<CreateSwapRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let assignment = state
        .assignment_repo
        .find_by_id(request.assignment_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Assignment not found".to_string()))?;

    if !assignment.is_active() {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "assignment-lifecycle".to_string(),
            detail: "assignment is not active".to_string(),
        }));
    }

    let schedule = state
        .schedule_repo
        .find_by_id(assignment.schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    if !schedule.permits_swap() {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "schedule-lifecycle".to_string(),
            detail: format!("schedule is {:?}; only published schedules permit swaps", schedule.status),
        }));
    }

    let now = Utc::now();
    let swap = Swap {
        id: Uuid::new_v4(),
        assignment_id: request.assignment_id,
        requested_by: request.requested_by,
        proposed_member_id: request.proposed_member_id,
        reason: request.reason,
        peer_decision: SwapPeerDecision::Pending,
        admin_decision: SwapAdminDecision::Pending,
        created_at: now,
        updated_at: now,
    };

    let created = state.swap_repo.create(swap).await.map_err(domain_error_response)?;
    Ok((StatusCode::CREATED, Json(SwapResponse::from(created))))
}

/// Records the proposed replacement's own decision: a peer rejection
/// is terminal regardless of admin.
#[utoipa::path(
    post,
    path = "/api/v1/swaps/{swap_id}/peer-decision",
    params(("swap_id" = Uuid, Path, description = "Swap id")),
    request_body = PeerDecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = SwapResponse),
        (status = 404, description = "Swap not found")
    ),
    tag = "swaps"
)]
pub async fn peer_decide_swap(
    State(state): State<AppState>,
    Path(swap_id): Path<Uuid>,
    Json(request): Json<PeerDecisionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let decision = if request.accept {
        SwapPeerDecision::Accepted
    } else {
        SwapPeerDecision::Rejected
    };

    let updated = state
        .swap_repo
        .update_peer_decision(swap_id, decision)
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::OK, Json(SwapResponse::from(updated))))
}

/// Records the admin's decision and, on approval, re-runs the
/// eligibility filter against the proposed replacement and applies the
/// swap atomically.
#[utoipa::path(
    post,
    path = "/api/v1/swaps/{swap_id}/admin-decision",
    params(("swap_id" = Uuid, Path, description = "Swap id")),
    request_body = AdminDecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = SwapResponse),
        (status = 404, description = "Swap not found"),
        (status = 422, description = "Swap is not ready for an admin decision, or the replacement is ineligible")
    ),
    tag = "swaps"
)]
pub async fn admin_decide_swap(
    State(state): State<AppState>,
    Path(swap_id): Path<Uuid>,
    Json(request): Json<AdminDecisionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let swap = state
        .swap_repo
        .find_by_id(swap_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Swap not found".to_string()))?;

    if swap.admin_decision != SwapAdminDecision::Pending {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "swap-lifecycle".to_string(),
            detail: "swap already has an admin decision".to_string(),
        }));
    }

    if swap.peer_decision != SwapPeerDecision::Accepted {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "swap-lifecycle".to_string(),
            detail: "swap is not awaiting an admin decision".to_string(),
        }));
    }

    if !request.approve {
        let updated = state
            .swap_repo
            .update_admin_decision(swap_id, SwapAdminDecision::Rejected)
            .await
            .map_err(domain_error_response)?;
        return Ok((StatusCode::OK, Json(SwapResponse::from(updated))));
    }

    let mut assignment = state
        .assignment_repo
        .find_by_id(swap.assignment_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Assignment not found".to_string()))?;

    if assignment.status != AssignmentStatus::Active {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "assignment-lifecycle".to_string(),
            detail: "assignment is no longer active".to_string(),
        }));
    }

    let schedule = state
        .schedule_repo
        .find_by_id(assignment.schedule_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Schedule not found".to_string()))?;

    if !schedule.permits_swap() {
        return Err(domain_error_response(DomainError::ConstraintViolation {
            constraint: "schedule-lifecycle".to_string(),
            detail: format!("schedule is {:?}; only published schedules permit swaps", schedule.status),
        }));
    }

    let candidate = state
        .member_directory
        .find_member(swap.proposed_member_id)
        .await
        .map_err(domain_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Proposed member not found".to_string()))?;

    let same_day = state
        .assignment_repo
        .find_active_on_date(assignment.date)
        .await
        .map_err(domain_error_response)?;
    let other_same_day_members: HashSet<Uuid> = same_day
        .into_iter()
        .filter(|a| a.id != assignment.id)
        .map(|a| a.member_id)
        .collect();

    let cooldown_window_start = assignment.date - chrono::Duration::days(state.config.atm_b_cooldown_days + 1);
    let history = state
        .assignment_repo
        .find_active_history(cooldown_window_start, assignment.date)
        .await
        .map_err(domain_error_response)?;
    let rest_map = RestCooldownMap::recompute_from_history(&history, &state.config);

    let maker_id = if assignment.kind == TaskKind::SysaidChecker {
        let (week_start, week_end) = week_bucket(assignment.date);
        let week_history = state
            .assignment_repo
            .find_active_history(week_start - chrono::Duration::days(1), week_end)
            .await
            .map_err(domain_error_response)?;
        week_history
            .into_iter()
            .find(|a| a.kind == TaskKind::SysaidMaker)
            .map(|a| a.member_id)
    } else {
        None
    };

    let unavailability = state
        .member_directory
        .unavailability_for(candidate.id, assignment.date, assignment.date)
        .await
        .map_err(domain_error_response)?;
    let availability = AvailabilityStore::new(vec![candidate.clone()], unavailability);

    swap_validator::validate(
        &candidate,
        &assignment,
        &availability,
        &rest_map,
        &state.config,
        &other_same_day_members,
        maker_id,
    )
    .map_err(domain_error_response)?;

    let window_start = assignment.date - chrono::Duration::days(state.config.fairness_window_days);
    let mut ledger = FairnessLedger::new(window_start, assignment.date);
    let persisted_counts = state
        .fairness_ledger_repo
        .find_all()
        .await
        .map_err(domain_error_response)?;
    for row in &persisted_counts {
        if (row.member_id == assignment.member_id || row.member_id == candidate.id) && row.kind == assignment.kind {
            ledger.set_count(row.member_id, row.kind, row.count);
        }
    }

    let replacement = swap_validator::apply(&mut ledger, &mut assignment, candidate.id);

    state
        .assignment_repo
        .apply_swap(assignment.clone(), replacement)
        .await
        .map_err(domain_error_response)?;

    let mut redis_conn = state.redis_pool.clone();
    shared::invalidate_cache(&mut redis_conn, &shared::cache_keys::schedule_result(assignment.schedule_id)).await;

    state
        .fairness_ledger_repo
        .upsert_counts(vec![
            FairnessCount {
                member_id: assignment.member_id,
                kind: assignment.kind,
                count: ledger.count(assignment.member_id, assignment.kind),
                window_start,
                window_end: assignment.date,
            },
            FairnessCount {
                member_id: candidate.id,
                kind: assignment.kind,
                count: ledger.count(candidate.id, assignment.kind),
                window_start,
                window_end: assignment.date,
            },
        ])
        .await
        .map_err(domain_error_response)?;

    let updated = state
        .swap_repo
        .update_admin_decision(swap_id, SwapAdminDecision::Approved)
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::OK, Json(SwapResponse::from(updated))))
}
