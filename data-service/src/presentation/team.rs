use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::Team;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamSerializer {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub parent_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamSerializer {
    pub fn new(team: Team, parent_name: Option<String>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            parent_id: team.parent_id,
            parent_name,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}
