use anyhow::Context;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Profile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        SELECT name, bio, avatar_url
          FROM profiles
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("get profile")?;
    Ok(row)
}

/// Insert-or-update in a single statement.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    name: Option<&str>,
    bio: Option<&str>,
    avatar_url: Option<&str>,
) -> anyhow::Result<Profile> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (user_id, name, bio, avatar_url)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id)
        DO UPDATE SET name = EXCLUDED.name,
                      bio = EXCLUDED.bio,
                      avatar_url = EXCLUDED.avatar_url,
                      updated_at = now()
        RETURNING name, bio, avatar_url
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(bio)
    .bind(avatar_url)
    .fetch_one(db)
    .await
    .context("upsert profile")?;
    Ok(row)
}
