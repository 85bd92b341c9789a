use async_trait::async_trait;
use shared::{DomainResult, PaginationParams};
use uuid::Uuid;

use crate::api::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::entities::Member;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Create a new member
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member>;

    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>>;

    /// Find member by email
    #[allow(dead_code)]
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>>;

    /// Find many members by ID in a single batch query
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Member>>;

    /// List all members with pagination
    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)>;

    /// Update member by ID
    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member>;

    /// Soft-deactivate a member. Members are never hard-deleted: past
    /// schedules and audit entries must keep resolving their name.
    async fn deactivate(&self, id: Uuid) -> DomainResult<()>;

    /// Get members by team ID
    async fn find_by_team_id(&self, team_id: Uuid) -> DomainResult<Vec<Member>>;
}
