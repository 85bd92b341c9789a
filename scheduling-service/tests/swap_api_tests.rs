//! Swap request/peer-decision/admin-decision API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Duration;
use common::{
    create_sample_assignment, create_sample_schedule, create_test_app_state, get_test_monday,
    MockAssignmentRepository, MockAuditLogRepository, MockFairnessLedgerRepository, MockScheduleRepository,
    MockSwapRepository,
};
use scheduling_service::api::create_router;
use scheduling_service::domain::engine::ResolvedMember;
use scheduling_service::domain::entities::Assignment;
use scheduling_service::infrastructure::member_directory_client::MockMemberDirectoryClient;
use serde_json::json;
use shared::{AssignmentStatus, MemberRole, OfficeDays, ScheduleStatus, SwapAdminDecision, SwapPeerDecision, TaskKind};
use std::sync::Arc;
use uuid::Uuid;

/// A published schedule covering `monday`'s week, so swap handlers that
/// gate on `Schedule::permits_swap()` see an eligible parent.
fn published_schedule_for(schedule_id: Uuid, monday: chrono::NaiveDate) -> scheduling_service::domain::entities::Schedule {
    create_sample_schedule(schedule_id, monday, monday + Duration::days(6), ScheduleStatus::Published)
}

fn candidate(id: Uuid) -> ResolvedMember {
    ResolvedMember {
        id,
        display_name: "Replacement".to_string(),
        office_days: OfficeDays::mon_to_fri(),
        role: MemberRole::Member,
        active: true,
    }
}

async fn setup_server_with_assignment(
    assignment: Assignment,
    member_directory: MockMemberDirectoryClient,
) -> (TestServer, Uuid) {
    let assignment_id = assignment.id;
    let schedule = published_schedule_for(assignment.schedule_id, get_test_monday());
    let assignment_repo = Arc::new(MockAssignmentRepository::with_assignments(vec![assignment]));

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::with_schedules(vec![schedule])),
        assignment_repo,
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::new()),
        Arc::new(member_directory),
    )
    .await;

    let app = create_router(state);
    (TestServer::new(app).unwrap(), assignment_id)
}

#[tokio::test]
async fn test_request_swap_on_active_assignment_succeeds() {
    let monday = get_test_monday();
    let member_id = Uuid::new_v4();
    let assignment = create_sample_assignment(Uuid::new_v4(), member_id, monday, TaskKind::AtmMorning);
    let (server, assignment_id) =
        setup_server_with_assignment(assignment, MockMemberDirectoryClient::new()).await;

    let request_body = json!({
        "assignment_id": assignment_id,
        "requested_by": member_id,
        "proposed_member_id": Uuid::new_v4(),
        "reason": "doctor appointment",
    });

    let response = server.post("/api/v1/swaps").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["peer_decision"], "PENDING");
    assert_eq!(body["admin_decision"], "PENDING");
    assert_eq!(body["effective_state"], "AWAITING_PEER");
}

#[tokio::test]
async fn test_request_swap_unknown_assignment_returns_404() {
    let monday = get_test_monday();
    let assignment = create_sample_assignment(Uuid::new_v4(), Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let (server, _) = setup_server_with_assignment(assignment, MockMemberDirectoryClient::new()).await;

    let request_body = json!({
        "assignment_id": Uuid::new_v4(),
        "requested_by": Uuid::new_v4(),
        "proposed_member_id": Uuid::new_v4(),
    });

    let response = server.post("/api/v1/swaps").json(&request_body).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_swap_on_superseded_assignment_fails() {
    let monday = get_test_monday();
    let mut assignment = create_sample_assignment(Uuid::new_v4(), Uuid::new_v4(), monday, TaskKind::AtmMorning);
    assignment.status = AssignmentStatus::Superseded;
    let (server, assignment_id) =
        setup_server_with_assignment(assignment, MockMemberDirectoryClient::new()).await;

    let request_body = json!({
        "assignment_id": assignment_id,
        "requested_by": Uuid::new_v4(),
        "proposed_member_id": Uuid::new_v4(),
    });

    let response = server.post("/api/v1/swaps").json(&request_body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_request_swap_on_archived_schedule_fails() {
    let monday = get_test_monday();
    let schedule_id = Uuid::new_v4();
    let assignment = create_sample_assignment(schedule_id, Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;
    let mut schedule = published_schedule_for(schedule_id, monday);
    schedule.status = ScheduleStatus::Archived;

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::with_schedules(vec![schedule])),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::new()),
        Arc::new(MockMemberDirectoryClient::new()),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let request_body = json!({
        "assignment_id": assignment_id,
        "requested_by": Uuid::new_v4(),
        "proposed_member_id": Uuid::new_v4(),
    });

    let response = server.post("/api/v1/swaps").json(&request_body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_peer_decision_accept_moves_to_awaiting_admin() {
    let monday = get_test_monday();
    let schedule_id = Uuid::new_v4();
    let assignment = create_sample_assignment(schedule_id, Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;

    let swap = scheduling_service::domain::entities::Swap {
        id: Uuid::new_v4(),
        assignment_id,
        requested_by: Uuid::new_v4(),
        proposed_member_id: Uuid::new_v4(),
        reason: None,
        peer_decision: SwapPeerDecision::Pending,
        admin_decision: SwapAdminDecision::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let swap_id = swap.id;

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::with_schedules(vec![published_schedule_for(
            schedule_id, monday,
        )])),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::with_swaps(vec![swap])),
        Arc::new(MockMemberDirectoryClient::new()),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post(&format!("/api/v1/swaps/{}/peer-decision", swap_id))
        .json(&json!({ "accept": true }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["peer_decision"], "ACCEPTED");
    assert_eq!(body["effective_state"], "AWAITING_ADMIN");
}

#[tokio::test]
async fn test_peer_decision_reject_is_terminal() {
    let monday = get_test_monday();
    let assignment = create_sample_assignment(Uuid::new_v4(), Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;

    let swap = scheduling_service::domain::entities::Swap {
        id: Uuid::new_v4(),
        assignment_id,
        requested_by: Uuid::new_v4(),
        proposed_member_id: Uuid::new_v4(),
        reason: None,
        peer_decision: SwapPeerDecision::Pending,
        admin_decision: SwapAdminDecision::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let swap_id = swap.id;

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::new()),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::with_swaps(vec![swap])),
        Arc::new(MockMemberDirectoryClient::new()),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post(&format!("/api/v1/swaps/{}/peer-decision", swap_id))
        .json(&json!({ "accept": false }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["peer_decision"], "REJECTED");
    assert_eq!(body["effective_state"], "REJECTED");
}

#[tokio::test]
async fn test_admin_decision_without_peer_acceptance_fails() {
    let monday = get_test_monday();
    let assignment = create_sample_assignment(Uuid::new_v4(), Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;

    let swap = scheduling_service::domain::entities::Swap {
        id: Uuid::new_v4(),
        assignment_id,
        requested_by: Uuid::new_v4(),
        proposed_member_id: Uuid::new_v4(),
        reason: None,
        peer_decision: SwapPeerDecision::Pending,
        admin_decision: SwapAdminDecision::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let swap_id = swap.id;

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::new()),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::with_swaps(vec![swap])),
        Arc::new(MockMemberDirectoryClient::new()),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post(&format!("/api/v1/swaps/{}/admin-decision", swap_id))
        .json(&json!({ "approve": true }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_admin_decision_approve_applies_swap() {
    let monday = get_test_monday();
    let original_member = Uuid::new_v4();
    let replacement_id = Uuid::new_v4();
    let schedule_id = Uuid::new_v4();
    let assignment = create_sample_assignment(schedule_id, original_member, monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;

    let swap = scheduling_service::domain::entities::Swap {
        id: Uuid::new_v4(),
        assignment_id,
        requested_by: original_member,
        proposed_member_id: replacement_id,
        reason: None,
        peer_decision: SwapPeerDecision::Accepted,
        admin_decision: SwapAdminDecision::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let swap_id = swap.id;

    let mut member_directory = MockMemberDirectoryClient::new();
    member_directory
        .expect_find_member()
        .returning(move |_| Ok(Some(candidate(replacement_id))));
    member_directory
        .expect_unavailability_for()
        .returning(|_, _, _| Ok(vec![]));

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::with_schedules(vec![published_schedule_for(
            schedule_id, monday,
        )])),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::with_swaps(vec![swap])),
        Arc::new(member_directory),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post(&format!("/api/v1/swaps/{}/admin-decision", swap_id))
        .json(&json!({ "approve": true }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["admin_decision"], "APPROVED");
    assert_eq!(body["effective_state"], "APPLIED");
}

#[tokio::test]
async fn test_admin_decision_reject_is_terminal() {
    let monday = get_test_monday();
    let assignment = create_sample_assignment(Uuid::new_v4(), Uuid::new_v4(), monday, TaskKind::AtmMorning);
    let assignment_id = assignment.id;

    let swap = scheduling_service::domain::entities::Swap {
        id: Uuid::new_v4(),
        assignment_id,
        requested_by: Uuid::new_v4(),
        proposed_member_id: Uuid::new_v4(),
        reason: None,
        peer_decision: SwapPeerDecision::Accepted,
        admin_decision: SwapAdminDecision::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let swap_id = swap.id;

    let (state, _receiver) = create_test_app_state(
        Arc::new(MockScheduleRepository::new()),
        Arc::new(MockAssignmentRepository::with_assignments(vec![assignment])),
        Arc::new(MockAuditLogRepository::new()),
        Arc::new(MockFairnessLedgerRepository::new()),
        Arc::new(MockSwapRepository::with_swaps(vec![swap])),
        Arc::new(MockMemberDirectoryClient::new()),
    )
    .await;
    let app = create_router(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post(&format!("/api/v1/swaps/{}/admin-decision", swap_id))
        .json(&json!({ "approve": false }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["admin_decision"], "REJECTED");
    assert_eq!(body["effective_state"], "REJECTED");
}
