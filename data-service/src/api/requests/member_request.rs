use serde::Deserialize;
use shared::{MemberRole, OfficeDays};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    pub display_name: String,
    pub office_days: OfficeDays,
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<MemberRole>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub display_name: Option<String>,
    pub office_days: Option<OfficeDays>,
    pub email: Option<String>,
    pub role: Option<MemberRole>,
    pub active: Option<bool>,
}
