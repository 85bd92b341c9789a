use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::TaskKind;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted snapshot of one `(member, kind)` fairness count, the
/// authoritative ledger row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FairnessCount {
    pub member_id: Uuid,
    pub kind: TaskKind,
    pub count: i64,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}
