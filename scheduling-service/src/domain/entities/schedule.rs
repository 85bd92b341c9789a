use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, ScheduleStatus, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A generated (or in-progress) schedule for one date range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ScheduleStatus,
    pub seed: i64,
    pub fairness_aggressiveness: i16,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for Schedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Schedule {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Schedule {
    /// draft -> published -> archived, one-way.
    pub fn can_transition_to(&self, next: ScheduleStatus) -> bool {
        matches!(
            (self.status, next),
            (ScheduleStatus::Draft, ScheduleStatus::Published)
                | (ScheduleStatus::Published, ScheduleStatus::Archived)
        )
    }

    /// Only draft schedules permit free editing; published permits
    /// swap/reassign; archived is read-only.
    pub fn permits_swap(&self) -> bool {
        matches!(self.status, ScheduleStatus::Published)
    }
}

/// Schedule response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ScheduleStatus,
    pub seed: i64,
    pub fairness_aggressiveness: i16,
    pub created_at: DateTime<Utc>,
    pub warnings: Vec<String>,
}

impl ScheduleResponse {
    pub fn new(schedule: Schedule, warnings: Vec<String>) -> Self {
        Self {
            id: schedule.id,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            status: schedule.status,
            seed: schedule.seed,
            fairness_aggressiveness: schedule.fairness_aggressiveness,
            created_at: schedule.created_at,
            warnings,
        }
    }
}
