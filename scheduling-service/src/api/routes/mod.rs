use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::state::AppState;
use shared::{
    AssignmentStatus, JobStatus, MemberRole, OfficeDays, ScheduleStatus, SwapAdminDecision,
    SwapPeerDecision, TaskKind,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Fair, auditable ATM and SysAid shift schedule generation"
    ),
    paths(
        crate::api::handlers::schedule_handlers::submit_schedule,
        crate::api::handlers::schedule_handlers::get_schedule_status,
        crate::api::handlers::schedule_handlers::get_schedule_result,
        crate::api::handlers::schedule_handlers::get_schedule_audit,
        crate::api::handlers::schedule_handlers::publish_schedule,
        crate::api::handlers::schedule_handlers::archive_schedule,
        crate::api::handlers::swap_handlers::request_swap,
        crate::api::handlers::swap_handlers::peer_decide_swap,
        crate::api::handlers::swap_handlers::admin_decide_swap,
    ),
    components(schemas(
        crate::api::requests::CreateScheduleRequest,
        crate::api::requests::CreateSwapRequest,
        crate::api::requests::PeerDecisionRequest,
        crate::api::requests::AdminDecisionRequest,
        crate::api::handlers::schedule_handlers::GenerationAcceptedResponse,
        crate::api::handlers::schedule_handlers::GenerationStatusResponse,
        crate::api::handlers::schedule_handlers::ScheduleResultResponse,
        crate::domain::entities::ScheduleResponse,
        crate::domain::entities::AssignmentResponse,
        crate::domain::entities::AuditEntryResponse,
        crate::domain::entities::SwapResponse,
        crate::domain::entities::SwapEffectiveState,
        crate::domain::engine::selector::CandidateRank,
        crate::domain::engine::selector::RankKey,
        JobStatus,
        ScheduleStatus,
        AssignmentStatus,
        TaskKind,
        MemberRole,
        OfficeDays,
        SwapPeerDecision,
        SwapAdminDecision,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let schedule_routes = Router::new()
        .route("/schedules", post(handlers::submit_schedule))
        .route("/schedules/:schedule_id/status", get(handlers::get_schedule_status))
        .route("/schedules/:schedule_id", get(handlers::get_schedule_result))
        .route("/schedules/:schedule_id/audit", get(handlers::get_schedule_audit))
        .route("/schedules/:schedule_id/publish", post(handlers::publish_schedule))
        .route("/schedules/:schedule_id/archive", post(handlers::archive_schedule));

    let swap_routes = Router::new()
        .route("/swaps", post(handlers::request_swap))
        .route("/swaps/:swap_id/peer-decision", post(handlers::peer_decide_swap))
        .route("/swaps/:swap_id/admin-decision", post(handlers::admin_decide_swap));

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(schedule_routes)
        .merge(swap_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
