use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use scheduling_service::api::state::AppState;
use scheduling_service::domain::engine::SchedulingConfig;
use scheduling_service::domain::entities::{Assignment, AuditEntry, FairnessCount, Schedule, Swap};
use scheduling_service::domain::repositories::{
    AssignmentRepository, AuditLogRepository, FairnessLedgerRepository, ScheduleRepository,
    SwapRepository,
};
use scheduling_service::infrastructure::member_directory_client::MemberDirectoryClient;
use scheduling_service::infrastructure::redis::RedisPool;
use scheduling_service::infrastructure::{GenerationJobStore, ScheduleGenerationRequest, TeamLockRegistry};
use shared::{AssignmentStatus, DomainError, DomainResult, ScheduleStatus, SwapAdminDecision, SwapPeerDecision, TaskKind};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Default)]
pub struct MockScheduleRepository {
    schedules: RwLock<HashMap<Uuid, Schedule>>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedules(schedules: Vec<Schedule>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.schedules.write().unwrap();
            for schedule in schedules {
                map.insert(schedule.id, schedule);
            }
        }
        repo
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn create(&self, schedule: Schedule) -> DomainResult<Schedule> {
        self.schedules.write().unwrap().insert(schedule.id, schedule.clone());
        Ok(schedule)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Schedule>> {
        Ok(self.schedules.read().unwrap().get(&id).cloned())
    }

    async fn update_status(&self, id: Uuid, status: ScheduleStatus) -> DomainResult<Schedule> {
        let mut map = self.schedules.write().unwrap();
        let schedule = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Schedule {} not found", id)))?;
        schedule.status = status;
        Ok(schedule.clone())
    }
}

#[derive(Default)]
pub struct MockAssignmentRepository {
    assignments: RwLock<Vec<Assignment>>,
}

impl MockAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        let repo = Self::new();
        *repo.assignments.write().unwrap() = assignments;
        repo
    }
}

#[async_trait]
impl AssignmentRepository for MockAssignmentRepository {
    async fn create_batch(&self, assignments: Vec<Assignment>) -> DomainResult<()> {
        self.assignments.write().unwrap().extend(assignments);
        Ok(())
    }

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<Assignment>> {
        Ok(self
            .assignments
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.schedule_id == schedule_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Assignment>> {
        Ok(self.assignments.read().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_active_history(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>> {
        Ok(self
            .assignments
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.is_active() && a.date > window_start && a.date <= window_end)
            .cloned()
            .collect())
    }

    async fn find_active_on_date(&self, date: NaiveDate) -> DomainResult<Vec<Assignment>> {
        Ok(self
            .assignments
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.is_active() && a.date == date)
            .cloned()
            .collect())
    }

    async fn apply_swap(&self, original: Assignment, replacement: Assignment) -> DomainResult<()> {
        let mut assignments = self.assignments.write().unwrap();
        if let Some(existing) = assignments.iter_mut().find(|a| a.id == original.id) {
            existing.status = AssignmentStatus::Superseded;
        }
        assignments.push(replacement);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockAuditLogRepository {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MockAuditLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<AuditEntry>) -> Self {
        let repo = Self::new();
        *repo.entries.write().unwrap() = entries;
        repo
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditLogRepository {
    async fn create_batch(&self, entries: Vec<AuditEntry>) -> DomainResult<()> {
        self.entries.write().unwrap().extend(entries);
        Ok(())
    }

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<AuditEntry>> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.schedule_id == schedule_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockFairnessLedgerRepository {
    counts: RwLock<Vec<FairnessCount>>,
}

impl MockFairnessLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FairnessLedgerRepository for MockFairnessLedgerRepository {
    async fn upsert_counts(&self, counts: Vec<FairnessCount>) -> DomainResult<()> {
        let mut current = self.counts.write().unwrap();
        for incoming in counts {
            if let Some(existing) = current
                .iter_mut()
                .find(|c| c.member_id == incoming.member_id && c.kind == incoming.kind)
            {
                *existing = incoming;
            } else {
                current.push(incoming);
            }
        }
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<FairnessCount>> {
        Ok(self.counts.read().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MockSwapRepository {
    swaps: RwLock<HashMap<Uuid, Swap>>,
}

impl MockSwapRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swaps(swaps: Vec<Swap>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.swaps.write().unwrap();
            for swap in swaps {
                map.insert(swap.id, swap);
            }
        }
        repo
    }
}

#[async_trait]
impl SwapRepository for MockSwapRepository {
    async fn create(&self, swap: Swap) -> DomainResult<Swap> {
        self.swaps.write().unwrap().insert(swap.id, swap.clone());
        Ok(swap)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Swap>> {
        Ok(self.swaps.read().unwrap().get(&id).cloned())
    }

    async fn update_peer_decision(&self, id: Uuid, decision: SwapPeerDecision) -> DomainResult<Swap> {
        let mut map = self.swaps.write().unwrap();
        let swap = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Swap {} not found", id)))?;
        swap.peer_decision = decision;
        swap.updated_at = Utc::now();
        Ok(swap.clone())
    }

    async fn update_admin_decision(&self, id: Uuid, decision: SwapAdminDecision) -> DomainResult<Swap> {
        let mut map = self.swaps.write().unwrap();
        let swap = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Swap {} not found", id)))?;
        swap.admin_decision = decision;
        swap.updated_at = Utc::now();
        Ok(swap.clone())
    }
}

pub fn create_sample_schedule(id: Uuid, start_date: NaiveDate, end_date: NaiveDate, status: ScheduleStatus) -> Schedule {
    Schedule {
        id,
        start_date,
        end_date,
        status,
        seed: 12345,
        fairness_aggressiveness: 1,
        created_at: Utc::now(),
    }
}

pub fn create_sample_assignment(schedule_id: Uuid, member_id: Uuid, date: NaiveDate, kind: TaskKind) -> Assignment {
    Assignment {
        id: Uuid::new_v4(),
        schedule_id,
        date,
        kind,
        shift_label: "Morning".to_string(),
        member_id,
        status: AssignmentStatus::Active,
        created_at: Utc::now(),
    }
}

/// A fixed Monday, for readable date-range fixtures.
pub fn get_test_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
}

/// Creates a `ConnectionManager` against a local redis; none of the
/// handlers exercised here read from it yet, but `AppState` requires one.
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

#[allow(clippy::too_many_arguments)]
pub async fn create_test_app_state(
    schedule_repo: Arc<dyn ScheduleRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    audit_log_repo: Arc<dyn AuditLogRepository>,
    fairness_ledger_repo: Arc<dyn FairnessLedgerRepository>,
    swap_repo: Arc<dyn SwapRepository>,
    member_directory: Arc<dyn MemberDirectoryClient>,
) -> (AppState, mpsc::Receiver<ScheduleGenerationRequest>) {
    let (sender, receiver) = mpsc::channel::<ScheduleGenerationRequest>(100);
    let state = AppState::new(
        schedule_repo,
        assignment_repo,
        audit_log_repo,
        fairness_ledger_repo,
        swap_repo,
        member_directory,
        sender,
        GenerationJobStore::new(),
        TeamLockRegistry::new(),
        SchedulingConfig::default(),
        create_mock_redis_pool().await,
    );
    (state, receiver)
}
