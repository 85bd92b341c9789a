use async_trait::async_trait;
use shared::{DomainResult, PaginationParams};
use uuid::Uuid;

use crate::api::requests::{CreateTeamRequest, UpdateTeamRequest};
use crate::domain::entities::Team;

/// Repository trait for Team operations
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a new team
    async fn create(&self, request: CreateTeamRequest) -> DomainResult<Team>;

    /// Find team by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Team>>;

    /// List all teams with pagination
    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Team>, u64)>;

    /// List child teams by parent ID
    #[allow(dead_code)]
    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Team>>;

    /// Update team by ID
    async fn update(&self, id: Uuid, request: UpdateTeamRequest) -> DomainResult<Team>;

    /// Delete team by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Get all descendant team IDs (recursive)
    async fn get_descendant_ids(&self, team_id: Uuid) -> DomainResult<Vec<Uuid>>;
}
