use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::Identifiable;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A whole-day unavailability window for one member.
/// Immutable except by deletion: members/admins add and remove windows,
/// they never edit one in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnavailablePeriod {
    pub id: Uuid,
    pub member_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for UnavailablePeriod {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl UnavailablePeriod {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Unavailability window response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnavailablePeriodResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

impl From<UnavailablePeriod> for UnavailablePeriodResponse {
    fn from(period: UnavailablePeriod) -> Self {
        Self {
            id: period.id,
            member_id: period.member_id,
            start_date: period.start_date,
            end_date: period.end_date,
            reason: period.reason,
        }
    }
}
