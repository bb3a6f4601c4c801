use async_trait::async_trait;
use uuid::Uuid;

use super::repo_types::{Resolution, SwapRequest, SwapRequestView};
use super::status::SwapStatus;

/// Persistence seam for the swap lifecycle. The PostgreSQL implementation
/// lives in `repo`; tests use an in-memory one.
#[async_trait]
pub trait SwapStore: Send + Sync {
    /// Current owner of a skill, `None` if the skill does not exist.
    async fn skill_owner(&self, skill_id: Uuid) -> anyhow::Result<Option<Uuid>>;

    /// Inserts a pending request. `None` when the requester already has a
    /// pending request for this skill.
    async fn insert_pending(
        &self,
        requester_id: Uuid,
        responder_id: Uuid,
        skill_id: Uuid,
    ) -> anyhow::Result<Option<SwapRequest>>;

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<SwapRequest>>;

    async fn find_view(&self, id: Uuid) -> anyhow::Result<Option<SwapRequestView>>;

    /// Requests where `user_id` is the responder, oldest first.
    async fn list_incoming(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>>;

    /// Requests where `user_id` is the requester, oldest first.
    async fn list_outgoing(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>>;

    /// Moves a pending request to `target` only if it is still pending.
    /// Accepting also moves `cost` credits from requester to responder and
    /// records a booking; all of it commits or none of it does.
    async fn resolve(
        &self,
        request: &SwapRequest,
        target: SwapStatus,
        cost: i32,
    ) -> anyhow::Result<Resolution>;
}
