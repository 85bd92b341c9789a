use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::engine::SchedulingConfig;
use crate::domain::repositories::{
    AssignmentRepository, AuditLogRepository, FairnessLedgerRepository, ScheduleRepository,
    SwapRepository,
};
use crate::infrastructure::member_directory_client::MemberDirectoryClient;
use crate::infrastructure::redis::RedisPool;
use crate::infrastructure::{GenerationJobStore, ScheduleGenerationRequest, TeamLockRegistry};

#[derive(Clone)]
pub struct AppState {
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub assignment_repo: Arc<dyn AssignmentRepository>,
    pub audit_log_repo: Arc<dyn AuditLogRepository>,
    pub fairness_ledger_repo: Arc<dyn FairnessLedgerRepository>,
    pub swap_repo: Arc<dyn SwapRepository>,
    pub member_directory: Arc<dyn MemberDirectoryClient>,
    pub generation_sender: mpsc::Sender<ScheduleGenerationRequest>,
    pub jobs: GenerationJobStore,
    pub team_locks: TeamLockRegistry,
    pub config: SchedulingConfig,
    pub redis_pool: RedisPool,
}

#[allow(clippy::too_many_arguments)]
impl AppState {
    pub fn new(
        schedule_repo: Arc<dyn ScheduleRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        audit_log_repo: Arc<dyn AuditLogRepository>,
        fairness_ledger_repo: Arc<dyn FairnessLedgerRepository>,
        swap_repo: Arc<dyn SwapRepository>,
        member_directory: Arc<dyn MemberDirectoryClient>,
        generation_sender: mpsc::Sender<ScheduleGenerationRequest>,
        jobs: GenerationJobStore,
        team_locks: TeamLockRegistry,
        config: SchedulingConfig,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            schedule_repo,
            assignment_repo,
            audit_log_repo,
            fairness_ledger_repo,
            swap_repo,
            member_directory,
            generation_sender,
            jobs,
            team_locks,
            config,
            redis_pool,
        }
    }
}
