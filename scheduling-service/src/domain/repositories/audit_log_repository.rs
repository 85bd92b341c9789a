use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::AuditEntry;

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn create_batch(&self, entries: Vec<AuditEntry>) -> DomainResult<()>;

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<AuditEntry>>;
}
