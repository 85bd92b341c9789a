use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::api::requests::CreateUnavailablePeriodRequest;
use crate::domain::entities::UnavailablePeriod;

#[async_trait]
pub trait UnavailabilityRepository: Send + Sync {
    /// Record a new unavailability window
    async fn create(
        &self,
        request: CreateUnavailablePeriodRequest,
    ) -> DomainResult<UnavailablePeriod>;

    /// Delete an unavailability window
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// All windows for one member that overlap `[range_start, range_end]`
    async fn find_overlapping(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>>;

    /// All windows for a set of members that overlap `[range_start,
    /// range_end]`, in one batch query (used when resolving a team's
    /// availability for a whole generation window).
    async fn find_overlapping_for_members(
        &self,
        member_ids: Vec<Uuid>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>>;
}
