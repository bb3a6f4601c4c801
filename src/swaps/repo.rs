use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Resolution, SwapRequest, SwapRequestRow, SwapRequestView};
use super::status::SwapStatus;
use super::store::SwapStore;
use crate::credits::repo as ledger;
use crate::credits::repo_types::NewBooking;

const VIEW_SELECT: &str = r#"
    SELECT sr.id, sr.status, sr.skill_id, s.skill_name,
           sr.requester_id, p1.name AS requester_name,
           sr.responder_id, p2.name AS responder_name,
           sr.created_at
      FROM swap_requests sr
      JOIN skills s ON s.id = sr.skill_id
      LEFT JOIN profiles p1 ON p1.user_id = sr.requester_id
      LEFT JOIN profiles p2 ON p2.user_id = sr.responder_id
"#;

#[derive(Clone)]
pub struct PgSwapStore {
    db: PgPool,
}

impl PgSwapStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    async fn list_where(&self, column: &str, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>> {
        let sql = format!(
            "{VIEW_SELECT} WHERE sr.{column} = $1 ORDER BY sr.created_at ASC, sr.id ASC"
        );
        let rows = sqlx::query_as::<_, SwapRequestView>(&sql)
            .bind(user_id)
            .fetch_all(&self.db)
            .await
            .with_context(|| format!("list swap requests by {column}"))?;
        Ok(rows)
    }
}

#[async_trait]
impl SwapStore for PgSwapStore {
    async fn skill_owner(&self, skill_id: Uuid) -> anyhow::Result<Option<Uuid>> {
        let owner = sqlx::query_scalar::<_, Uuid>(r#"SELECT user_id FROM skills WHERE id = $1"#)
            .bind(skill_id)
            .fetch_optional(&self.db)
            .await
            .context("lookup skill owner")?;
        Ok(owner)
    }

    async fn insert_pending(
        &self,
        requester_id: Uuid,
        responder_id: Uuid,
        skill_id: Uuid,
    ) -> anyhow::Result<Option<SwapRequest>> {
        // Partial unique index: one pending request per (requester, skill).
        let row = sqlx::query_as::<_, SwapRequestRow>(
            r#"
            INSERT INTO swap_requests (requester_id, responder_id, skill_id, status)
            VALUES ($1, $2, $3, 'pending')
            ON CONFLICT (requester_id, skill_id) WHERE status = 'pending' DO NOTHING
            RETURNING id, requester_id, responder_id, skill_id, status
            "#,
        )
        .bind(requester_id)
        .bind(responder_id)
        .bind(skill_id)
        .fetch_optional(&self.db)
        .await
        .context("insert swap request")?;

        row.map(SwapRequest::try_from).transpose().map_err(Into::into)
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<SwapRequest>> {
        let row = sqlx::query_as::<_, SwapRequestRow>(
            r#"
            SELECT id, requester_id, responder_id, skill_id, status
              FROM swap_requests
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find swap request")?;

        row.map(SwapRequest::try_from).transpose().map_err(Into::into)
    }

    async fn find_view(&self, id: Uuid) -> anyhow::Result<Option<SwapRequestView>> {
        let sql = format!("{VIEW_SELECT} WHERE sr.id = $1");
        let row = sqlx::query_as::<_, SwapRequestView>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("find swap request view")?;
        Ok(row)
    }

    async fn list_incoming(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>> {
        self.list_where("responder_id", user_id).await
    }

    async fn list_outgoing(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>> {
        self.list_where("requester_id", user_id).await
    }

    async fn resolve(
        &self,
        request: &SwapRequest,
        target: SwapStatus,
        cost: i32,
    ) -> anyhow::Result<Resolution> {
        let mut tx = self.db.begin().await.context("begin tx")?;

        let row = sqlx::query_as::<_, SwapRequestRow>(
            r#"
            UPDATE swap_requests
               SET status = $1, updated_at = now()
             WHERE id = $2 AND responder_id = $3 AND status = 'pending'
            RETURNING id, requester_id, responder_id, skill_id, status
            "#,
        )
        .bind(target.as_str())
        .bind(request.id)
        .bind(request.responder_id)
        .fetch_optional(&mut *tx)
        .await
        .context("transition swap request")?;

        // Dropping `tx` without commit rolls back.
        let Some(row) = row else {
            return Ok(Resolution::AlreadyResolved);
        };

        if target == SwapStatus::Accepted {
            let moved =
                ledger::transfer_tx(&mut tx, request.requester_id, request.responder_id, cost)
                    .await?;
            if !moved {
                return Ok(Resolution::InsufficientCredits);
            }
            ledger::insert_booking_tx(
                &mut tx,
                NewBooking {
                    swap_request_id: request.id,
                    provider_id: request.responder_id,
                    recipient_id: request.requester_id,
                    skill_id: request.skill_id,
                    credits: cost,
                },
            )
            .await?;
        }

        tx.commit().await.context("commit tx")?;
        Ok(Resolution::Resolved(SwapRequest::try_from(row)?))
    }
}
