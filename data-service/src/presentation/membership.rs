use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::TeamMembership;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MembershipSerializer {
    pub id: Uuid,
    pub member_id: Uuid,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMembership> for MembershipSerializer {
    fn from(membership: TeamMembership) -> Self {
        Self {
            id: membership.id,
            member_id: membership.member_id,
            team_id: membership.team_id,
            created_at: membership.created_at,
        }
    }
}
