use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{AssignmentStatus, DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Assignment;
use crate::domain::repositories::AssignmentRepository;

pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn create_batch(&self, assignments: Vec<Assignment>) -> DomainResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for assignment in assignments {
            sqlx::query(
                r#"
                INSERT INTO assignments (id, schedule_id, date, kind, shift_label, member_id, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(assignment.id)
            .bind(assignment.schedule_id)
            .bind(assignment.date)
            .bind(assignment.kind)
            .bind(&assignment.shift_label)
            .bind(assignment.member_id)
            .bind(assignment.status)
            .bind(assignment.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn find_by_schedule_id(&self, schedule_id: Uuid) -> DomainResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, schedule_id, date, kind, shift_label, member_id, status, created_at
            FROM assignments
            WHERE schedule_id = $1
            ORDER BY date, kind, shift_label
            "#,
        )
        .bind(schedule_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Assignment>> {
        let row = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, schedule_id, date, kind, shift_label, member_id, status, created_at
            FROM assignments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row)
    }

    async fn find_active_history(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, schedule_id, date, kind, shift_label, member_id, status, created_at
            FROM assignments
            WHERE status = 'ACTIVE' AND date > $1 AND date <= $2
            ORDER BY date, kind, shift_label
            "#,
        )
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }

    async fn find_active_on_date(&self, date: NaiveDate) -> DomainResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, schedule_id, date, kind, shift_label, member_id, status, created_at
            FROM assignments
            WHERE status = 'ACTIVE' AND date = $1
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }

    async fn apply_swap(&self, original: Assignment, replacement: Assignment) -> DomainResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query("UPDATE assignments SET status = $1 WHERE id = $2")
            .bind(AssignmentStatus::Superseded)
            .bind(original.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO assignments (id, schedule_id, date, kind, shift_label, member_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(replacement.id)
        .bind(replacement.schedule_id)
        .bind(replacement.date)
        .bind(replacement.kind)
        .bind(&replacement.shift_label)
        .bind(replacement.member_id)
        .bind(replacement.status)
        .bind(replacement.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
