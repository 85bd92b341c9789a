use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A swap names the assignment to replace, who is asking, and who they
/// propose in their place.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSwapRequest {
    pub assignment_id: Uuid,
    pub requested_by: Uuid,
    pub proposed_member_id: Uuid,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PeerDecisionRequest {
    pub accept: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminDecisionRequest {
    pub approve: bool,
}
