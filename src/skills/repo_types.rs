use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_name: String,
    pub description: Option<String>,
    pub is_offered: bool, // false: the owner is looking for it
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Offered skill annotated with its owner's display name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OfferedSkill {
    pub id: Uuid,
    pub skill_name: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub user_name: Option<String>,
}
