//! Rows for the database-backed tests.

use sqlx::PgPool;
use uuid::Uuid;

/// Inserts a user holding `credits`, with an optional profile name.
pub async fn user(db: &PgPool, email: &str, name: Option<&str>, credits: i32) -> Uuid {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO users (email, password_hash) VALUES ($1, 'unused') RETURNING id"#,
    )
    .bind(email)
    .fetch_one(db)
    .await
    .unwrap();

    sqlx::query(r#"INSERT INTO time_credits (user_id, credits) VALUES ($1, $2)"#)
        .bind(id)
        .bind(credits)
        .execute(db)
        .await
        .unwrap();

    if let Some(name) = name {
        sqlx::query(r#"INSERT INTO profiles (user_id, name) VALUES ($1, $2)"#)
            .bind(id)
            .bind(name)
            .execute(db)
            .await
            .unwrap();
    }
    id
}

pub async fn count(db: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(db).await.unwrap()
}
