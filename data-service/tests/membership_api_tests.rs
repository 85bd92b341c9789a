//! Membership API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_member, create_sample_team, create_test_app_state,
    MockMembershipRepository, MockTeamRepository, MockUnavailabilityRepository,
    MockMemberRepository,
};
use data_service::api::create_router;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server_with_data(
    member_list: Vec<data_service::domain::entities::Member>,
    team_list: Vec<data_service::domain::entities::Team>,
) -> TestServer {
    let member_repo = Arc::new(MockMemberRepository::with_members(member_list));
    let team_repo = Arc::new(MockTeamRepository::with_teams(team_list));
    let membership_repo = Arc::new(MockMembershipRepository::new());
    let unavailability_repo = Arc::new(MockUnavailabilityRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let state = create_test_app_state(
        member_repo,
        team_repo,
        membership_repo,
        unavailability_repo,
        redis_pool,
    );
    let app = create_router(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_add_member_success() {
    let member_id = Uuid::new_v4();
    let team_id = Uuid::new_v4();
    let member = create_sample_member(member_id, "John Doe", "john@example.com");
    let team = create_sample_team(team_id, "Engineering", None);

    let server = setup_test_server_with_data(vec![member], vec![team]).await;

    let request_body = json!({
        "member_id": member_id.to_string()
    });

    let response = server
        .post(&format!("/api/v1/teams/{}/members", team_id))
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["member_id"], member_id.to_string());
    assert_eq!(body["team_id"], team_id.to_string());
}

#[tokio::test]
async fn test_get_team_members_empty() {
    let team_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Engineering", None);

    let server = setup_test_server_with_data(vec![], vec![team]).await;

    let response = server.get(&format!("/api/v1/teams/{}/members", team_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_team_members_with_data() {
    let team_id = Uuid::new_v4();
    let member = create_sample_member(Uuid::new_v4(), "John Doe", "john@example.com");
    let team = create_sample_team(team_id, "Engineering", None);

    let server = setup_test_server_with_data(vec![member], vec![team]).await;

    let response = server.get(&format!("/api/v1/teams/{}/members", team_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["display_name"], "John Doe");
}

#[tokio::test]
async fn test_remove_member_success() {
    let member_id = Uuid::new_v4();
    let team_id = Uuid::new_v4();
    let member = create_sample_member(member_id, "John Doe", "john@example.com");
    let team = create_sample_team(team_id, "Engineering", None);

    let server = setup_test_server_with_data(vec![member], vec![team]).await;

    let request_body = json!({
        "member_id": member_id.to_string()
    });
    server
        .post(&format!("/api/v1/teams/{}/members", team_id))
        .json(&request_body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .delete(&format!("/api/v1/teams/{}/members/{}", team_id, member_id))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_remove_member_not_found() {
    let team_id = Uuid::new_v4();
    let member_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Engineering", None);

    let server = setup_test_server_with_data(vec![], vec![team]).await;

    let response = server
        .delete(&format!("/api/v1/teams/{}/members/{}", team_id, member_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
