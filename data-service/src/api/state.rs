use std::sync::Arc;

use crate::domain::repositories::{
    MemberRepository, MembershipRepository, TeamRepository, UnavailabilityRepository,
};
use crate::infrastructure::redis::RedisPool;
use crate::infrastructure::MemberDirectoryService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub member_repo: Arc<dyn MemberRepository>,
    pub team_repo: Arc<dyn TeamRepository>,
    pub membership_repo: Arc<dyn MembershipRepository>,
    pub unavailability_repo: Arc<dyn UnavailabilityRepository>,
    pub member_directory: Arc<MemberDirectoryService>,
    pub redis_pool: RedisPool,
}

impl AppState {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        team_repo: Arc<dyn TeamRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
        unavailability_repo: Arc<dyn UnavailabilityRepository>,
        member_directory: Arc<MemberDirectoryService>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            member_repo,
            team_repo,
            membership_repo,
            unavailability_repo,
            member_directory,
            redis_pool,
        }
    }
}
