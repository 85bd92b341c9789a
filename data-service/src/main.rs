mod api;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{
    MemberRepository, MembershipRepository, TeamRepository, UnavailabilityRepository,
};
use infrastructure::{
    config::Settings,
    database, redis,
    repositories::{
        PostgresMemberRepository, PostgresMembershipRepository, PostgresTeamRepository,
        PostgresUnavailabilityRepository,
    },
    MemberDirectoryService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Data Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    let member_repo: Arc<dyn MemberRepository> =
        Arc::new(PostgresMemberRepository::new(db_pool.clone()));
    let team_repo: Arc<dyn TeamRepository> =
        Arc::new(PostgresTeamRepository::new(db_pool.clone()));
    let membership_repo: Arc<dyn MembershipRepository> =
        Arc::new(PostgresMembershipRepository::new(db_pool.clone()));
    let unavailability_repo: Arc<dyn UnavailabilityRepository> =
        Arc::new(PostgresUnavailabilityRepository::new(db_pool.clone()));

    tracing::info!("Repositories initialized");

    let member_directory = Arc::new(MemberDirectoryService::new(
        team_repo.clone(),
        member_repo.clone(),
        membership_repo.clone(),
    ));

    tracing::info!("Services initialized");

    let app_state = AppState::new(
        member_repo,
        team_repo,
        membership_repo,
        unavailability_repo,
        member_directory,
        redis_pool,
    );

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Data Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
