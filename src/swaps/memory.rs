use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Resolution, SwapRequest, SwapRequestView};
use super::status::SwapStatus;
use super::store::SwapStore;

#[derive(Default)]
struct Inner {
    skills: HashMap<Uuid, (Uuid, String)>,
    names: HashMap<Uuid, String>,
    requests: Vec<(SwapRequest, OffsetDateTime)>,
    balances: HashMap<Uuid, i32>,
    bookings: Vec<(Uuid, i32)>,
}

/// In-memory `SwapStore` with the same semantics as the PostgreSQL one.
#[derive(Default)]
pub struct MemorySwapStore {
    inner: Mutex<Inner>,
}

impl MemorySwapStore {
    pub fn add_user(&self, name: &str, credits: i32) -> Uuid {
        let id = Uuid::new_v4();
        let mut g = self.inner.lock().unwrap();
        g.names.insert(id, name.to_string());
        g.balances.insert(id, credits);
        id
    }

    pub fn add_skill(&self, owner: Uuid, skill_name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .lock()
            .unwrap()
            .skills
            .insert(id, (owner, skill_name.to_string()));
        id
    }

    pub fn balance(&self, user_id: Uuid) -> i32 {
        self.inner.lock().unwrap().balances.get(&user_id).copied().unwrap_or(0)
    }

    /// Bookings as `(swap_request_id, credits)`.
    pub fn bookings(&self) -> Vec<(Uuid, i32)> {
        self.inner.lock().unwrap().bookings.clone()
    }

    fn view(g: &Inner, (r, created_at): &(SwapRequest, OffsetDateTime)) -> SwapRequestView {
        SwapRequestView {
            id: r.id,
            status: r.status.as_str().to_string(),
            skill_id: r.skill_id,
            skill_name: g.skills.get(&r.skill_id).map(|s| s.1.clone()).unwrap_or_default(),
            requester_id: r.requester_id,
            requester_name: g.names.get(&r.requester_id).cloned(),
            responder_id: r.responder_id,
            responder_name: g.names.get(&r.responder_id).cloned(),
            created_at: *created_at,
        }
    }
}

#[async_trait]
impl SwapStore for MemorySwapStore {
    async fn skill_owner(&self, skill_id: Uuid) -> anyhow::Result<Option<Uuid>> {
        Ok(self.inner.lock().unwrap().skills.get(&skill_id).map(|s| s.0))
    }

    async fn insert_pending(
        &self,
        requester_id: Uuid,
        responder_id: Uuid,
        skill_id: Uuid,
    ) -> anyhow::Result<Option<SwapRequest>> {
        let mut g = self.inner.lock().unwrap();
        let duplicate = g.requests.iter().any(|(r, _)| {
            r.requester_id == requester_id
                && r.skill_id == skill_id
                && r.status == SwapStatus::Pending
        });
        if duplicate {
            return Ok(None);
        }
        let req = SwapRequest {
            id: Uuid::new_v4(),
            requester_id,
            responder_id,
            skill_id,
            status: SwapStatus::Pending,
        };
        g.requests.push((req.clone(), OffsetDateTime::now_utc()));
        Ok(Some(req))
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<SwapRequest>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .find(|(r, _)| r.id == id)
            .map(|(r, _)| r.clone()))
    }

    async fn find_view(&self, id: Uuid) -> anyhow::Result<Option<SwapRequestView>> {
        let g = self.inner.lock().unwrap();
        Ok(g.requests.iter().find(|(r, _)| r.id == id).map(|e| Self::view(&g, e)))
    }

    async fn list_incoming(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>> {
        let g = self.inner.lock().unwrap();
        Ok(g.requests
            .iter()
            .filter(|(r, _)| r.responder_id == user_id)
            .map(|e| Self::view(&g, e))
            .collect())
    }

    async fn list_outgoing(&self, user_id: Uuid) -> anyhow::Result<Vec<SwapRequestView>> {
        let g = self.inner.lock().unwrap();
        Ok(g.requests
            .iter()
            .filter(|(r, _)| r.requester_id == user_id)
            .map(|e| Self::view(&g, e))
            .collect())
    }

    async fn resolve(
        &self,
        request: &SwapRequest,
        target: SwapStatus,
        cost: i32,
    ) -> anyhow::Result<Resolution> {
        let mut g = self.inner.lock().unwrap();
        let Some(idx) = g.requests.iter().position(|(r, _)| {
            r.id == request.id
                && r.responder_id == request.responder_id
                && r.status == SwapStatus::Pending
        }) else {
            return Ok(Resolution::AlreadyResolved);
        };

        if target == SwapStatus::Accepted {
            let from = g.balances.get(&request.requester_id).copied().unwrap_or(0);
            if from < cost {
                return Ok(Resolution::InsufficientCredits);
            }
            g.balances.insert(request.requester_id, from - cost);
            *g.balances.entry(request.responder_id).or_insert(0) += cost;
            g.bookings.push((request.id, cost));
        }

        let r = &mut g.requests[idx].0;
        r.status = target;
        Ok(Resolution::Resolved(r.clone()))
    }
}
