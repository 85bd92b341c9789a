use async_trait::async_trait;
use shared::DomainResult;

use crate::domain::entities::FairnessCount;

/// Persists the current-window snapshot produced by a generation. The
/// fairness ledger itself stays in memory during a generation; this
/// trait only writes the resulting rows.
#[async_trait]
pub trait FairnessLedgerRepository: Send + Sync {
    async fn upsert_counts(&self, counts: Vec<FairnessCount>) -> DomainResult<()>;

    async fn find_all(&self) -> DomainResult<Vec<FairnessCount>>;
}
