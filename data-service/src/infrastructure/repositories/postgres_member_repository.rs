use async_trait::async_trait;
use shared::{DomainError, DomainResult, MemberRole, PaginationParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::entities::Member;
use crate::domain::repositories::MemberRepository;

pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member> {
        let role = request.role.unwrap_or(MemberRole::Member);

        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (display_name, office_days, email, role, active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, display_name, office_days, email, role, active, created_at, updated_at
            "#,
        )
        .bind(&request.display_name)
        .bind(request.office_days)
        .bind(&request.email)
        .bind(&role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, display_name, office_days, email, role, active, created_at, updated_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, display_name, office_days, email, role, active, created_at, updated_at
            FROM members
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Member>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, display_name, office_days, email, role, active, created_at, updated_at
            FROM members
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(members)
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, display_name, office_days, email, role, active, created_at, updated_at
            FROM members
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((members, total.0 as u64))
    }

    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;

        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET display_name = $1, office_days = $2, email = $3, role = $4, active = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, display_name, office_days, email, role, active, created_at, updated_at
            "#,
        )
        .bind(request.display_name.unwrap_or(current.display_name))
        .bind(request.office_days.unwrap_or(current.office_days))
        .bind(request.email.or(current.email))
        .bind(request.role.unwrap_or(current.role))
        .bind(request.active.unwrap_or(current.active))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn deactivate(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("UPDATE members SET active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Member with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn find_by_team_id(&self, team_id: Uuid) -> DomainResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.id, m.display_name, m.office_days, m.email, m.role, m.active, m.created_at, m.updated_at
            FROM members m
            INNER JOIN team_memberships tm ON m.id = tm.member_id
            WHERE tm.team_id = $1
            ORDER BY m.display_name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(members)
    }
}
