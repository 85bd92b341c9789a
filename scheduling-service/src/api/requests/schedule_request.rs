use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A generation request names a team, a date range and a seed.
/// `seed`/`fairness_aggressiveness` default when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScheduleRequest {
    pub team_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seed: Option<u64>,
    pub fairness_aggressiveness: Option<u8>,
}
