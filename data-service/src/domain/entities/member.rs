use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, MemberRole, OfficeDays, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A team member eligible for ATM/SysAid assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub display_name: String,
    pub office_days: OfficeDays,
    pub email: Option<String>,
    pub role: MemberRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Member {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Member {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Member response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: Uuid,
    pub display_name: String,
    pub office_days: OfficeDays,
    pub email: Option<String>,
    pub role: MemberRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            display_name: member.display_name,
            office_days: member.office_days,
            email: member.email,
            role: member.role,
            active: member.active,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
