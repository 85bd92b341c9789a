use futures::future::try_join_all;
use shared::DomainResult;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Member;
use crate::domain::repositories::{MemberRepository, MembershipRepository, TeamRepository};

/// Resolves a team (and all of its nested sub-teams) down to the flat,
/// active membership the scheduling engine draws candidates from.
pub struct MemberDirectoryService {
    team_repo: Arc<dyn TeamRepository>,
    member_repo: Arc<dyn MemberRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
}

impl MemberDirectoryService {
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        member_repo: Arc<dyn MemberRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            team_repo,
            member_repo,
            membership_repo,
        }
    }

    /// All active members of a team, including members reachable through
    /// nested sub-teams. Deactivated members never appear here even if a
    /// membership row still references them.
    pub async fn get_resolved_members(&self, team_id: Uuid) -> DomainResult<Vec<Member>> {
        let mut team_ids = vec![team_id];
        team_ids.extend(self.team_repo.get_descendant_ids(team_id).await?);

        let membership_futures = team_ids
            .iter()
            .map(|tid| self.membership_repo.find_by_team_id(*tid));

        let membership_results = try_join_all(membership_futures).await?;

        let member_ids: Vec<Uuid> = membership_results
            .into_iter()
            .flatten()
            .map(|m| m.member_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let all_members = self.member_repo.find_by_ids(member_ids).await?;

        let mut active_members: Vec<Member> = all_members
            .into_iter()
            .filter(|member| member.active)
            .collect();

        active_members.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        Ok(active_members)
    }
}
