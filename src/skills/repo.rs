use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{OfferedSkill, Skill};

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Skill>> {
    let rows = sqlx::query_as::<_, Skill>(
        r#"
        SELECT id, user_id, skill_name, description, is_offered, created_at
          FROM skills
         WHERE user_id = $1
         ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list skills by user")?;
    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    skill_name: &str,
    description: Option<&str>,
    is_offered: bool,
) -> anyhow::Result<Skill> {
    let row = sqlx::query_as::<_, Skill>(
        r#"
        INSERT INTO skills (user_id, skill_name, description, is_offered)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, skill_name, description, is_offered, created_at
        "#,
    )
    .bind(user_id)
    .bind(skill_name)
    .bind(description)
    .bind(is_offered)
    .fetch_one(db)
    .await
    .context("insert skill")?;
    Ok(row)
}

/// Every offered skill across all users. Owners without a profile are
/// still listed, with a null `user_name`.
pub async fn list_offered(db: &PgPool) -> anyhow::Result<Vec<OfferedSkill>> {
    let rows = sqlx::query_as::<_, OfferedSkill>(
        r#"
        SELECT s.id, s.skill_name, s.description, s.user_id, p.name AS user_name
          FROM skills s
          LEFT JOIN profiles p ON p.user_id = s.user_id
         WHERE s.is_offered = true
         ORDER BY s.created_at ASC
        "#,
    )
    .fetch_all(db)
    .await
    .context("list offered skills")?;
    Ok(rows)
}
