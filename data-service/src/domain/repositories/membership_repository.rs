use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::TeamMembership;

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Add a member to a team
    async fn add_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<TeamMembership>;

    /// Remove a member from a team
    async fn remove_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<()>;

    /// List memberships for a team
    async fn find_by_team_id(&self, team_id: Uuid) -> DomainResult<Vec<TeamMembership>>;
}
