//! Async job runner wiring the schedule assembler to persistence: an
//! `mpsc` channel decouples the HTTP handler (which answers `202
//! Accepted` immediately) from the generation, which can take long enough
//! over a wide date range that a synchronous handler would time out.
//!
//! Generation progress before a `Schedule` row exists is tracked in
//! [`GenerationJobStore`], an in-process map. `Schedule` only has the
//! three states draft/published/archived, so "pending"/"processing"/
//! "failed" are not persisted states of that entity; they describe the
//! job, not the schedule.

use shared::{DomainError, DomainResult, JobStatus};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::domain::engine::{self, GenerationRequest, SchedulingConfig};
use crate::domain::entities::Schedule;
use crate::domain::repositories::{
    AssignmentRepository, AuditLogRepository, FairnessLedgerRepository, ScheduleRepository,
};
use crate::infrastructure::member_directory_client::MemberDirectoryClient;

#[derive(Debug, Clone)]
pub struct ScheduleGenerationRequest {
    pub schedule_id: Uuid,
    pub team_id: Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub seed: u64,
    pub fairness_aggressiveness: u8,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationJobStore {
    jobs: Arc<RwLock<HashMap<Uuid, (JobStatus, Option<String>)>>>,
}

impl GenerationJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, id: Uuid, status: JobStatus, error: Option<String>) {
        self.jobs.write().await.insert(id, (status, error));
    }

    pub async fn get(&self, id: Uuid) -> Option<(JobStatus, Option<String>)> {
        self.jobs.read().await.get(&id).cloned()
    }
}

/// The "at most one in-flight generation per team" advisory lock of
/// spec.md §5. A generation holds its team's slot from submission
/// through commit (or failure); a second submission for the same team
/// is rejected as `ConcurrentGeneration` rather than queued, so callers
/// retry instead of racing on ledger deltas. Window-overlap is not
/// tracked separately: one team runs at most one generation regardless
/// of date range, which is a stricter (and simpler) reading of the same
/// contract.
#[derive(Debug, Clone, Default)]
pub struct TeamLockRegistry {
    held: Arc<RwLock<HashSet<Uuid>>>,
}

impl TeamLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the lock was free and is now held by the caller.
    pub async fn try_acquire(&self, team_id: Uuid) -> bool {
        self.held.write().await.insert(team_id)
    }

    pub async fn release(&self, team_id: Uuid) {
        self.held.write().await.remove(&team_id);
    }
}

pub struct JobProcessor {
    schedule_repo: Arc<dyn ScheduleRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    audit_log_repo: Arc<dyn AuditLogRepository>,
    fairness_ledger_repo: Arc<dyn FairnessLedgerRepository>,
    member_directory: Arc<dyn MemberDirectoryClient>,
    jobs: GenerationJobStore,
    team_locks: TeamLockRegistry,
    config: SchedulingConfig,
}

impl JobProcessor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        schedule_repo: Arc<dyn ScheduleRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        audit_log_repo: Arc<dyn AuditLogRepository>,
        fairness_ledger_repo: Arc<dyn FairnessLedgerRepository>,
        member_directory: Arc<dyn MemberDirectoryClient>,
        jobs: GenerationJobStore,
        team_locks: TeamLockRegistry,
        config: SchedulingConfig,
    ) -> Self {
        Self {
            schedule_repo,
            assignment_repo,
            audit_log_repo,
            fairness_ledger_repo,
            member_directory,
            jobs,
            team_locks,
            config,
        }
    }

    pub fn start(
        self: Arc<Self>,
    ) -> (
        mpsc::Sender<ScheduleGenerationRequest>,
        tokio::task::JoinHandle<()>,
    ) {
        let (tx, mut rx) = mpsc::channel::<ScheduleGenerationRequest>(100);

        let handle = tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let schedule_id = request.schedule_id;
                let team_id = request.team_id;
                if let Err(e) = self.process(request).await {
                    tracing::error!(%schedule_id, error = ?e, "schedule generation failed");
                    self.jobs
                        .set(schedule_id, JobStatus::Failed, Some(e.to_string()))
                        .await;
                }
                self.team_locks.release(team_id).await;
            }
        });

        (tx, handle)
    }

    async fn process(&self, request: ScheduleGenerationRequest) -> DomainResult<()> {
        tracing::info!(schedule_id = %request.schedule_id, "starting schedule generation");
        self.jobs.set(request.schedule_id, JobStatus::Processing, None).await;

        let (members, unavailability) = self
            .member_directory
            .resolve_team(request.team_id, request.start_date, request.end_date)
            .await?;

        if members.is_empty() {
            return Err(DomainError::InvalidInput(
                "no active members resolved for team".to_string(),
            ));
        }

        let window_start = request.start_date - chrono::Duration::days(self.config.fairness_window_days);
        let history = self
            .assignment_repo
            .find_active_history(window_start, request.start_date)
            .await?;

        let outcome = engine::generate(
            GenerationRequest {
                schedule_id: request.schedule_id,
                start_date: request.start_date,
                end_date: request.end_date,
                seed: request.seed,
                fairness_aggressiveness: request.fairness_aggressiveness,
                members,
                unavailability,
                history,
            },
            &self.config,
        )?;

        tracing::info!(
            schedule_id = %request.schedule_id,
            assignments = outcome.assignments.len(),
            warnings = outcome.warnings.len(),
            "generation complete, persisting"
        );

        let schedule = Schedule {
            id: request.schedule_id,
            start_date: request.start_date,
            end_date: request.end_date,
            status: shared::ScheduleStatus::Draft,
            seed: request.seed as i64,
            fairness_aggressiveness: request.fairness_aggressiveness as i16,
            created_at: chrono::Utc::now(),
        };

        self.schedule_repo.create(schedule).await?;
        self.assignment_repo.create_batch(outcome.assignments).await?;
        self.audit_log_repo.create_batch(outcome.audit_entries).await?;
        self.fairness_ledger_repo.upsert_counts(outcome.fairness_counts).await?;

        for warning in &outcome.warnings {
            tracing::warn!(schedule_id = %request.schedule_id, %warning, "generation warning");
        }

        self.jobs.set(request.schedule_id, JobStatus::Completed, None).await;
        tracing::info!(schedule_id = %request.schedule_id, "schedule generation persisted");
        Ok(())
    }
}
