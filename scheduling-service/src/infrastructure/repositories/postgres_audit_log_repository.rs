use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::AuditEntry;
use crate::domain::repositories::AuditLogRepository;

pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn create_batch(&self, entries: Vec<AuditEntry>) -> DomainResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO audit_entries
                    (id, schedule_id, entry_date, week_start, kind, shift_label, chosen_member_id, candidates, tie_break_reason, warnings, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(entry.id)
            .bind(entry.schedule_id)
            .bind(entry.entry_date)
            .bind(entry.week_start)
            .bind(entry.kind)
            .bind(&entry.shift_label)
            .bind(entry.chosen_member_id)
            .bind(&entry.candidates)
            .bind(&entry.tie_break_reason)
            .bind(&entry.warnings)
            .bind(entry.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditEntry>(
            r#"
            SELECT id, schedule_id, entry_date, week_start, kind, shift_label, chosen_member_id, candidates, tie_break_reason, warnings, created_at
            FROM audit_entries
            WHERE schedule_id = $1
            ORDER BY COALESCE(entry_date, week_start), kind
            "#,
        )
        .bind(schedule_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }
}
