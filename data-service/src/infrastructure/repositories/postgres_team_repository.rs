use async_trait::async_trait;
use shared::{DomainError, DomainResult, PaginationParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateTeamRequest, UpdateTeamRequest};
use crate::domain::entities::Team;
use crate::domain::repositories::TeamRepository;

pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, request: CreateTeamRequest) -> DomainResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, parent_id)
            VALUES ($1, $2)
            RETURNING id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(team)
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Team>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM teams
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((teams, total.0 as u64))
    }

    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM teams
            WHERE parent_id = $1
            ORDER BY name
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(teams)
    }

    async fn update(&self, id: Uuid, request: UpdateTeamRequest) -> DomainResult<Team> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Team with id {} not found", id)))?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $1, parent_id = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.parent_id.or(current.parent_id))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(team)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Team with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn get_descendant_ids(&self, team_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            WITH RECURSIVE descendants AS (
                SELECT id FROM teams WHERE id = $1
                UNION
                SELECT t.id FROM teams t
                INNER JOIN descendants d ON t.parent_id = d.id
            )
            SELECT id FROM descendants
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
