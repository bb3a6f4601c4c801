use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A completed swap: who provided the skill, who received it and what it cost.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub swap_request_id: Uuid,
    pub provider_id: Uuid, // responder, credited
    pub recipient_id: Uuid, // requester, debited
    pub skill_id: Uuid,
    pub credits: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub swap_request_id: Uuid,
    pub provider_id: Uuid,
    pub recipient_id: Uuid,
    pub skill_id: Uuid,
    pub credits: i32,
}
