mod api;
mod domain;
mod infrastructure;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::state::AppState;
use domain::repositories::{
    AssignmentRepository, AuditLogRepository, FairnessLedgerRepository, ScheduleRepository,
    SwapRepository,
};
use infrastructure::member_directory_client::{MemberDirectoryClient, ReqwestMemberDirectoryClient};
use infrastructure::repositories::{
    PostgresAssignmentRepository, PostgresAuditLogRepository, PostgresFairnessLedgerRepository,
    PostgresScheduleRepository, PostgresSwapRepository,
};
use infrastructure::{
    config::Settings, database, redis as app_redis, GenerationJobStore, JobProcessor, TeamLockRegistry,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheduling_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scheduling Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let redis_pool = app_redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    let scheduling_config: domain::engine::SchedulingConfig = settings.scheduling.clone().into();

    let schedule_repo: Arc<dyn ScheduleRepository> =
        Arc::new(PostgresScheduleRepository::new(db_pool.clone()));
    let assignment_repo: Arc<dyn AssignmentRepository> =
        Arc::new(PostgresAssignmentRepository::new(db_pool.clone()));
    let audit_log_repo: Arc<dyn AuditLogRepository> =
        Arc::new(PostgresAuditLogRepository::new(db_pool.clone()));
    let fairness_ledger_repo: Arc<dyn FairnessLedgerRepository> =
        Arc::new(PostgresFairnessLedgerRepository::new(db_pool.clone()));
    let swap_repo: Arc<dyn SwapRepository> = Arc::new(PostgresSwapRepository::new(db_pool.clone()));
    let member_directory: Arc<dyn MemberDirectoryClient> =
        Arc::new(ReqwestMemberDirectoryClient::new(settings.data_service.url.clone()));

    let jobs = GenerationJobStore::new();
    let team_locks = TeamLockRegistry::new();

    let processor = Arc::new(JobProcessor::new(
        schedule_repo.clone(),
        assignment_repo.clone(),
        audit_log_repo.clone(),
        fairness_ledger_repo.clone(),
        member_directory.clone(),
        jobs.clone(),
        team_locks.clone(),
        scheduling_config.clone(),
    ));

    let (generation_sender, _processor_handle) = processor.start();

    let state = AppState::new(
        schedule_repo,
        assignment_repo,
        audit_log_repo,
        fairness_ledger_repo,
        swap_repo,
        member_directory,
        generation_sender,
        jobs,
        team_locks,
        scheduling_config,
        redis_pool,
    );

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Scheduling Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
