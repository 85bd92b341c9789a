//! Team API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_team, create_test_app_state, MockMembershipRepository,
    MockTeamRepository, MockUnavailabilityRepository, MockMemberRepository,
};
use data_service::api::create_router;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server() -> TestServer {
    let member_repo = Arc::new(MockMemberRepository::new());
    let team_repo = Arc::new(MockTeamRepository::new());
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

async fn setup_test_server_with_teams(
    team_list: Vec<data_service::domain::entities::Team>,
) -> TestServer {
    let member_repo = Arc::new(MockMemberRepository::new());
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
async fn test_create_team_success() {
    let server = setup_test_server().await;

    let request_body = json!({
        "name": "Engineering Team"
    });

    let response = server.post("/api/v1/teams").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Team created successfully");
    assert_eq!(body["data"]["name"], "Engineering Team");
    assert!(body["data"]["parent_id"].is_null());
}

#[tokio::test]
async fn test_create_team_with_parent() {
    let parent_id = Uuid::new_v4();
    let parent_team = create_sample_team(parent_id, "Parent Team", None);
    let server = setup_test_server_with_teams(vec![parent_team]).await;

    let request_body = json!({
        "name": "Child Team",
        "parent_id": parent_id.to_string()
    });

    let response = server.post("/api/v1/teams").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Child Team");
    assert_eq!(body["data"]["parent_id"], parent_id.to_string());
    assert_eq!(body["data"]["parent_name"], "Parent Team");
}

#[tokio::test]
async fn test_get_team_by_id_success() {
    let team_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Test Team", None);
    let server = setup_test_server_with_teams(vec![team]).await;

    let response = server.get(&format!("/api/v1/teams/{}", team_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Team retrieved successfully");
    assert_eq!(body["data"]["name"], "Test Team");
}

#[tokio::test]
async fn test_get_team_by_id_not_found() {
    let server = setup_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server.get(&format!("/api/v1/teams/{}", non_existent_id)).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_teams_empty() {
    let server = setup_test_server().await;

    let response = server.get("/api/v1/teams").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Team list retrieved successfully");
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_teams_with_data() {
    let team1 = create_sample_team(Uuid::new_v4(), "Team 1", None);
    let team2 = create_sample_team(Uuid::new_v4(), "Team 2", None);
    let server = setup_test_server_with_teams(vec![team1, team2]).await;

    let response = server.get("/api/v1/teams").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_teams_with_pagination() {
    let team1 = create_sample_team(Uuid::new_v4(), "Team 1", None);
    let team2 = create_sample_team(Uuid::new_v4(), "Team 2", None);
    let team3 = create_sample_team(Uuid::new_v4(), "Team 3", None);
    let server = setup_test_server_with_teams(vec![team1, team2, team3]).await;

    let response = server.get("/api/v1/teams?page=1&page_size=2").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_team_success() {
    let team_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Original Name", None);
    let server = setup_test_server_with_teams(vec![team]).await;

    let update_request = json!({
        "name": "Updated Name"
    });

    let response = server
        .put(&format!("/api/v1/teams/{}", team_id))
        .json(&update_request)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Updated Name");
}

#[tokio::test]
async fn test_update_team_not_found() {
    let server = setup_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let update_request = json!({
        "name": "Updated Name"
    });

    let response = server
        .put(&format!("/api/v1/teams/{}", non_existent_id))
        .json(&update_request)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_team_success() {
    let team_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Test Team", None);
    let server = setup_test_server_with_teams(vec![team]).await;

    let response = server.delete(&format!("/api/v1/teams/{}", team_id)).await;

    response.assert_status(StatusCode::NO_CONTENT);

    let get_response = server.get(&format!("/api/v1/teams/{}", team_id)).await;
    get_response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_team_not_found() {
    let server = setup_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .delete(&format!("/api/v1/teams/{}", non_existent_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_resolved_members_success() {
    let team_id = Uuid::new_v4();
    let team = create_sample_team(team_id, "Test Team", None);
    let server = setup_test_server_with_teams(vec![team]).await;

    let response = server
        .get(&format!("/api/v1/teams/{}/resolved-members", team_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Resolved members retrieved successfully");
}

#[tokio::test]
async fn test_get_resolved_members_not_found() {
    let server = setup_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .get(&format!(
            "/api/v1/teams/{}/resolved-members",
            non_existent_id
        ))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
