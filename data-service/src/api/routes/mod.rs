use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Service API",
        version = "1.0.0",
        description = "Member, team, and availability directory API with Redis caching"
    ),
    paths(
        // Member endpoints
        handlers::member_handlers::create_member,
        handlers::member_handlers::get_member_by_id,
        handlers::member_handlers::list_members,
        handlers::member_handlers::update_member,
        handlers::member_handlers::deactivate_member,
        // Team endpoints
        handlers::team_handlers::create_team,
        handlers::team_handlers::get_team_by_id,
        handlers::team_handlers::list_teams,
        handlers::team_handlers::update_team,
        handlers::team_handlers::delete_team,
        handlers::team_handlers::get_resolved_members,
        // Membership endpoints
        handlers::membership_handlers::add_member,
        handlers::membership_handlers::remove_member,
        handlers::membership_handlers::get_team_members,
        // Unavailability endpoints
        handlers::unavailability_handlers::create_unavailability,
        handlers::unavailability_handlers::delete_unavailability,
        handlers::unavailability_handlers::list_unavailability_for_member,
        // Batch import endpoints
        handlers::batch_handlers::batch_import_members,
        handlers::batch_handlers::batch_import_teams,
        handlers::batch_handlers::batch_import_memberships,
    ),
    components(schemas(
        // Shared types
        shared::MemberRole,
        shared::OfficeDays,
        shared::PaginationParams,
        shared::PaginatedResponse<crate::domain::entities::MemberResponse>,
        shared::PaginatedResponse<crate::presentation::TeamSerializer>,
        // Member schemas
        crate::domain::entities::MemberResponse,
        crate::api::requests::CreateMemberRequest,
        crate::api::requests::UpdateMemberRequest,
        // Team schemas
        crate::presentation::TeamSerializer,
        crate::api::requests::CreateTeamRequest,
        crate::api::requests::UpdateTeamRequest,
        // Membership schemas
        crate::presentation::MembershipSerializer,
        crate::api::requests::AddMemberRequest,
        // Unavailability schemas
        crate::domain::entities::UnavailablePeriodResponse,
        crate::api::requests::CreateUnavailablePeriodRequest,
        // Batch import schemas
        crate::api::handlers::batch_handlers::BatchImportMembersRequest,
        crate::api::handlers::batch_handlers::BatchImportTeamsRequest,
        crate::api::handlers::batch_handlers::BatchImportMembershipsRequest,
        crate::api::handlers::batch_handlers::BatchImportResponse,
    )),
    tags(
        (name = "members", description = "Member management endpoints"),
        (name = "teams", description = "Team management endpoints"),
        (name = "memberships", description = "Team membership management endpoints"),
        (name = "unavailability", description = "Member unavailability window endpoints"),
        (name = "batch", description = "Batch import endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let member_routes = Router::new()
        .route("/members", post(handlers::member_handlers::create_member))
        .route("/members", get(handlers::member_handlers::list_members))
        .route(
            "/members/:id",
            get(handlers::member_handlers::get_member_by_id),
        )
        .route(
            "/members/:id",
            put(handlers::member_handlers::update_member),
        )
        .route(
            "/members/:id",
            delete(handlers::member_handlers::deactivate_member),
        )
        .route(
            "/members/:member_id/unavailability",
            get(handlers::unavailability_handlers::list_unavailability_for_member),
        );

    let team_routes = Router::new()
        .route("/teams", post(handlers::team_handlers::create_team))
        .route("/teams", get(handlers::team_handlers::list_teams))
        .route("/teams/:id", get(handlers::team_handlers::get_team_by_id))
        .route("/teams/:id", put(handlers::team_handlers::update_team))
        .route("/teams/:id", delete(handlers::team_handlers::delete_team))
        .route(
            "/teams/:id/resolved-members",
            get(handlers::team_handlers::get_resolved_members),
        );

    let membership_routes = Router::new()
        .route(
            "/teams/:team_id/members",
            post(handlers::membership_handlers::add_member),
        )
        .route(
            "/teams/:team_id/members",
            get(handlers::membership_handlers::get_team_members),
        )
        .route(
            "/teams/:team_id/members/:member_id",
            delete(handlers::membership_handlers::remove_member),
        );

    let unavailability_routes = Router::new()
        .route(
            "/unavailability",
            post(handlers::unavailability_handlers::create_unavailability),
        )
        .route(
            "/unavailability/:id",
            delete(handlers::unavailability_handlers::delete_unavailability),
        );

    let batch_routes = Router::new()
        .route(
            "/batch/members",
            post(handlers::batch_handlers::batch_import_members),
        )
        .route(
            "/batch/teams",
            post(handlers::batch_handlers::batch_import_teams),
        )
        .route(
            "/batch/memberships",
            post(handlers::batch_handlers::batch_import_memberships),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(member_routes)
        .merge(team_routes)
        .merge(membership_routes)
        .merge(unavailability_routes)
        .merge(batch_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
