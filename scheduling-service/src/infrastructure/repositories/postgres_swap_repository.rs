use async_trait::async_trait;
use shared::{DomainError, DomainResult, SwapAdminDecision, SwapPeerDecision};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Swap;
use crate::domain::repositories::SwapRepository;

pub struct PostgresSwapRepository {
    pool: PgPool,
}

impl PostgresSwapRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SwapRepository for PostgresSwapRepository {
    async fn create(&self, swap: Swap) -> DomainResult<Swap> {
        let row = sqlx::query_as::<_, Swap>(
            r#"
            INSERT INTO swaps (id, assignment_id, requested_by, proposed_member_id, reason, peer_decision, admin_decision, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, assignment_id, requested_by, proposed_member_id, reason, peer_decision, admin_decision, created_at, updated_at
            "#,
        )
        .bind(swap.id)
        .bind(swap.assignment_id)
        .bind(swap.requested_by)
        .bind(swap.proposed_member_id)
        .bind(&swap.reason)
        .bind(swap.peer_decision)
        .bind(swap.admin_decision)
        .bind(swap.created_at)
        .bind(swap.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Swap>> {
        let row = sqlx::query_as::<_, Swap>(
            r#"
            SELECT id, assignment_id, requested_by, proposed_member_id, reason, peer_decision, admin_decision, created_at, updated_at
            FROM swaps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row)
    }

    async fn update_peer_decision(&self, id: Uuid, decision: SwapPeerDecision) -> DomainResult<Swap> {
        let row = sqlx::query_as::<_, Swap>(
            r#"
            UPDATE swaps
            SET peer_decision = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, assignment_id, requested_by, proposed_member_id, reason, peer_decision, admin_decision, created_at, updated_at
            "#,
        )
        .bind(decision)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("Swap with id {} not found", id)))?;

        Ok(row)
    }

    async fn update_admin_decision(&self, id: Uuid, decision: SwapAdminDecision) -> DomainResult<Swap> {
        let row = sqlx::query_as::<_, Swap>(
            r#"
            UPDATE swaps
            SET admin_decision = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, assignment_id, requested_by, proposed_member_id, reason, peer_decision, admin_decision, created_at, updated_at
            "#,
        )
        .bind(decision)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("Swap with id {} not found", id)))?;

        Ok(row)
    }
}
