use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMembership {
    pub id: Uuid,
    pub member_id: Uuid,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
}
