use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{AssignmentStatus, Identifiable, TaskKind};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One selection of a member to a (date, kind, shift_label) slot. A
/// member x date x kind x shift_label tuple is unique while active,
/// enforced at the storage layer by a partial unique index rather than
/// in this type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub date: NaiveDate,
    pub kind: TaskKind,
    pub shift_label: String,
    pub member_id: Uuid,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for Assignment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        matches!(self.status, AssignmentStatus::Active)
    }

    /// Stable iteration order for a schedule: date ascending, kind
    /// canonical order, shift_label ascending.
    pub fn sort_key(&self) -> (NaiveDate, u8, &str) {
        (self.date, self.kind.canonical_rank(), self.shift_label.as_str())
    }
}

/// Assignment response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: TaskKind,
    pub shift_label: String,
    pub member_id: Uuid,
    pub status: AssignmentStatus,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            date: assignment.date,
            kind: assignment.kind,
            shift_label: assignment.shift_label,
            member_id: assignment.member_id,
            status: assignment.status,
        }
    }
}
