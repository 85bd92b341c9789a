use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::Assignment;

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Persists a freshly generated batch in one transaction: all
    /// assignments, audit entries and ledger deltas commit together.
    async fn create_batch(&self, assignments: Vec<Assignment>) -> DomainResult<()>;

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<Assignment>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Assignment>>;

    /// Active assignments for one member within `(window_start,
    /// window_end]`, used to seed the fairness ledger and to re-run
    /// eligibility during a swap.
    async fn find_active_history(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>>;

    /// Active ATM assignments for every member on one date, used by the
    /// swap validator's same-day distinctness check.
    async fn find_active_on_date(&self, date: NaiveDate) -> DomainResult<Vec<Assignment>>;

    /// Supersedes `original` and inserts `replacement` atomically; no
    /// partial state mutation.
    async fn apply_swap(&self, original: Assignment, replacement: Assignment) -> DomainResult<()>;
}
