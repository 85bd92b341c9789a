use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::CreateUnavailablePeriodRequest;
use crate::domain::entities::UnavailablePeriod;
use crate::domain::repositories::UnavailabilityRepository;

pub struct PostgresUnavailabilityRepository {
    pool: PgPool,
}

impl PostgresUnavailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnavailabilityRepository for PostgresUnavailabilityRepository {
    async fn create(
        &self,
        request: CreateUnavailablePeriodRequest,
    ) -> DomainResult<UnavailablePeriod> {
        if request.end_date < request.start_date {
            return Err(DomainError::InvalidInput(
                "end_date must not precede start_date".to_string(),
            ));
        }

        let period = sqlx::query_as::<_, UnavailablePeriod>(
            r#"
            INSERT INTO unavailable_periods (member_id, start_date, end_date, reason)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, start_date, end_date, reason, created_at
            "#,
        )
        .bind(request.member_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(period)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM unavailable_periods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Unavailability window with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn find_overlapping(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>> {
        let periods = sqlx::query_as::<_, UnavailablePeriod>(
            r#"
            SELECT id, member_id, start_date, end_date, reason, created_at
            FROM unavailable_periods
            WHERE member_id = $1 AND start_date <= $3 AND end_date >= $2
            ORDER BY start_date
            "#,
        )
        .bind(member_id)
        .bind(range_start)
        .bind(range_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(periods)
    }

    async fn find_overlapping_for_members(
        &self,
        member_ids: Vec<Uuid>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let periods = sqlx::query_as::<_, UnavailablePeriod>(
            r#"
            SELECT id, member_id, start_date, end_date, reason, created_at
            FROM unavailable_periods
            WHERE member_id = ANY($1) AND start_date <= $3 AND end_date >= $2
            ORDER BY member_id, start_date
            "#,
        )
        .bind(&member_ids)
        .bind(range_start)
        .bind(range_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(periods)
    }
}
