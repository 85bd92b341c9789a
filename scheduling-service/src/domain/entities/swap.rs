use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, SwapAdminDecision, SwapPeerDecision, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A request to replace the assignee of a single existing assignment.
/// Lifecycle: pending -> peer decides -> admin decides -> terminal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Swap {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub requested_by: Uuid,
    pub proposed_member_id: Uuid,
    pub reason: Option<String>,
    pub peer_decision: SwapPeerDecision,
    pub admin_decision: SwapAdminDecision,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Swap {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Swap {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// The named effective states of the swap decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapEffectiveState {
    AwaitingPeer,
    AwaitingAdmin,
    Rejected,
    Applied,
}

impl Swap {
    pub fn effective_state(&self) -> SwapEffectiveState {
        match (self.peer_decision, self.admin_decision) {
            (SwapPeerDecision::Rejected, _) => SwapEffectiveState::Rejected,
            (SwapPeerDecision::Pending, _) => SwapEffectiveState::AwaitingPeer,
            (SwapPeerDecision::Accepted, SwapAdminDecision::Pending) => {
                SwapEffectiveState::AwaitingAdmin
            }
            (SwapPeerDecision::Accepted, SwapAdminDecision::Approved) => {
                SwapEffectiveState::Applied
            }
            (SwapPeerDecision::Accepted, SwapAdminDecision::Rejected) => {
                SwapEffectiveState::Rejected
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.effective_state(),
            SwapEffectiveState::Rejected | SwapEffectiveState::Applied
        )
    }
}

/// Swap response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SwapResponse {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub requested_by: Uuid,
    pub proposed_member_id: Uuid,
    pub reason: Option<String>,
    pub peer_decision: SwapPeerDecision,
    pub admin_decision: SwapAdminDecision,
    pub effective_state: SwapEffectiveState,
}

impl From<Swap> for SwapResponse {
    fn from(swap: Swap) -> Self {
        let effective_state = swap.effective_state();
        Self {
            id: swap.id,
            assignment_id: swap.assignment_id,
            requested_by: swap.requested_by,
            proposed_member_id: swap.proposed_member_id,
            reason: swap.reason,
            peer_decision: swap.peer_decision,
            admin_decision: swap.admin_decision,
            effective_state,
        }
    }
}
