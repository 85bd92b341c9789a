use async_trait::async_trait;
use shared::{DomainResult, ScheduleStatus};
use uuid::Uuid;

use crate::domain::entities::Schedule;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: Schedule) -> DomainResult<Schedule>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Schedule>>;

    async fn update_status(&self, id: Uuid, status: ScheduleStatus) -> DomainResult<Schedule>;
}
