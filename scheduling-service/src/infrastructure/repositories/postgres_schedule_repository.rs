use async_trait::async_trait;
use shared::{DomainError, DomainResult, ScheduleStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Schedule;
use crate::domain::repositories::ScheduleRepository;

pub struct PostgresScheduleRepository {
    pool: PgPool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn create(&self, schedule: Schedule) -> DomainResult<Schedule> {
        let row = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (id, start_date, end_date, status, seed, fairness_aggressiveness, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, start_date, end_date, status, seed, fairness_aggressiveness, created_at
            "#,
        )
        .bind(schedule.id)
        .bind(schedule.start_date)
        .bind(schedule.end_date)
        .bind(schedule.status)
        .bind(schedule.seed)
        .bind(schedule.fairness_aggressiveness)
        .bind(schedule.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Schedule>> {
        let row = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT id, start_date, end_date, status, seed, fairness_aggressiveness, created_at
            FROM schedules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row)
    }

    async fn update_status(&self, id: Uuid, status: ScheduleStatus) -> DomainResult<Schedule> {
        let row = sqlx::query_as::<_, Schedule>(
            r#"
            UPDATE schedules
            SET status = $1
            WHERE id = $2
            RETURNING id, start_date, end_date, status, seed, fairness_aggressiveness, created_at
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("Schedule with id {} not found", id)))?;

        Ok(row)
    }
}
