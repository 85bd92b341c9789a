use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::TeamMembership;
use crate::domain::repositories::MembershipRepository;

pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn add_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<TeamMembership> {
        let membership = sqlx::query_as::<_, TeamMembership>(
            r#"
            INSERT INTO team_memberships (member_id, team_id)
            VALUES ($1, $2)
            ON CONFLICT (member_id, team_id) DO NOTHING
            RETURNING id, member_id, team_id, created_at
            "#,
        )
        .bind(member_id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(membership)
    }

    async fn remove_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<()> {
        let result =
            sqlx::query("DELETE FROM team_memberships WHERE member_id = $1 AND team_id = $2")
                .bind(member_id)
                .bind(team_id)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Membership not found".to_string()));
        }

        Ok(())
    }

    async fn find_by_team_id(&self, team_id: Uuid) -> DomainResult<Vec<TeamMembership>> {
        let memberships = sqlx::query_as::<_, TeamMembership>(
            r#"
            SELECT id, member_id, team_id, created_at
            FROM team_memberships
            WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(memberships)
    }
}
