use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::TaskKind;
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::engine::selector::CandidateRank;

/// One recorded selection decision. Carries every candidate considered
/// and why the head of the ranking was chosen, so a later reader can
/// reconstruct the decision without re-running the generation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuditEntry {
    pub id: Uuid,
    pub schedule_id: Uuid,
    /// Set for ATM entries (one entry per day/shift).
    pub entry_date: Option<NaiveDate>,
    /// Set for SysAid entries (one entry per week/role); the Monday of
    /// the bucketed week.
    pub week_start: Option<NaiveDate>,
    pub kind: TaskKind,
    pub shift_label: Option<String>,
    /// None when the slot was left unfilled and left unassigned.
    pub chosen_member_id: Option<Uuid>,
    #[sqlx(json)]
    pub candidates: Json<Vec<CandidateRank>>,
    pub tie_break_reason: String,
    #[sqlx(json)]
    pub warnings: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Audit entry response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEntryResponse {
    pub id: Uuid,
    pub entry_date: Option<NaiveDate>,
    pub week_start: Option<NaiveDate>,
    pub kind: TaskKind,
    pub shift_label: Option<String>,
    pub chosen_member_id: Option<Uuid>,
    pub candidates: Vec<CandidateRank>,
    pub tie_break_reason: String,
    pub warnings: Vec<String>,
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        Self {
            id: entry.id,
            entry_date: entry.entry_date,
            week_start: entry.week_start,
            kind: entry.kind,
            shift_label: entry.shift_label,
            chosen_member_id: entry.chosen_member_id,
            candidates: entry.candidates.0,
            tie_break_reason: entry.tie_break_reason,
            warnings: entry.warnings.0,
        }
    }
}
