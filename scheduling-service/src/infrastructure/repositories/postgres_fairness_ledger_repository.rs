use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;

use crate::domain::entities::FairnessCount;
use crate::domain::repositories::FairnessLedgerRepository;

pub struct PostgresFairnessLedgerRepository {
    pool: PgPool,
}

impl PostgresFairnessLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FairnessLedgerRepository for PostgresFairnessLedgerRepository {
    async fn upsert_counts(&self, counts: Vec<FairnessCount>) -> DomainResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for row in counts {
            sqlx::query(
                r#"
                INSERT INTO fairness_counts (member_id, kind, count, window_start, window_end)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (member_id, kind)
                DO UPDATE SET count = EXCLUDED.count, window_start = EXCLUDED.window_start, window_end = EXCLUDED.window_end
                "#,
            )
            .bind(row.member_id)
            .bind(row.kind)
            .bind(row.count)
            .bind(row.window_start)
            .bind(row.window_end)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<FairnessCount>> {
        let rows = sqlx::query_as::<_, FairnessCount>(
            "SELECT member_id, kind, count, window_start, window_end FROM fairness_counts",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }
}
