use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::status::{SwapStatus, UnknownStatus};

/// Raw `swap_requests` row; status is stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct SwapRequestRow {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub responder_id: Uuid,
    pub skill_id: Uuid,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub responder_id: Uuid,
    pub skill_id: Uuid,
    pub status: SwapStatus,
}

impl TryFrom<SwapRequestRow> for SwapRequest {
    type Error = UnknownStatus;

    fn try_from(r: SwapRequestRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            requester_id: r.requester_id,
            responder_id: r.responder_id,
            skill_id: r.skill_id,
            status: r.status.parse()?,
        })
    }
}

/// Swap request joined with skill and both parties' display names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SwapRequestView {
    pub id: Uuid,
    pub status: String,
    pub skill_id: Uuid,
    pub skill_name: String,
    pub requester_id: Uuid,
    pub requester_name: Option<String>,
    pub responder_id: Uuid,
    pub responder_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Outcome of a conditional status write.
#[derive(Debug)]
pub enum Resolution {
    Resolved(SwapRequest),
    AlreadyResolved,
    InsufficientCredits,
}
