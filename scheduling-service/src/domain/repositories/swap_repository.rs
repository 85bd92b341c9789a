use async_trait::async_trait;
use shared::{DomainResult, SwapAdminDecision, SwapPeerDecision};
use uuid::Uuid;

use crate::domain::entities::Swap;

#[async_trait]
pub trait SwapRepository: Send + Sync {
    async fn create(&self, swap: Swap) -> DomainResult<Swap>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Swap>>;

    async fn update_peer_decision(&self, id: Uuid, decision: SwapPeerDecision) -> DomainResult<Swap>;

    async fn update_admin_decision(&self, id: Uuid, decision: SwapAdminDecision) -> DomainResult<Swap>;
}
