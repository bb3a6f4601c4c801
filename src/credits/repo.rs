use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::{Booking, NewBooking};

/// Current balance; users without a ledger row have 0.
pub async fn balance(db: &PgPool, user_id: Uuid) -> anyhow::Result<i32> {
    let credits = sqlx::query_scalar::<_, i32>(
        r#"SELECT credits FROM time_credits WHERE user_id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("get time credits")?;
    Ok(credits.unwrap_or(0))
}

/// Opens the ledger row for a freshly registered user.
pub async fn seed_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    amount: i32,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO time_credits (user_id, credits)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .execute(&mut **tx)
    .await
    .context("seed time credits")?;
    Ok(())
}

/// Moves `amount` credits between users inside the caller's transaction.
/// Returns `false` (and changes nothing) if `from` cannot cover it.
///
/// Both ledger rows are locked in `user_id` order first, so two transfers
/// running in opposite directions queue instead of deadlocking.
pub async fn transfer_tx(
    tx: &mut Transaction<'_, Postgres>,
    from: Uuid,
    to: Uuid,
    amount: i32,
) -> anyhow::Result<bool> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT user_id
          FROM time_credits
         WHERE user_id = ANY($1)
         ORDER BY user_id
           FOR UPDATE
        "#,
    )
    .bind(vec![from, to])
    .fetch_all(&mut **tx)
    .await
    .context("lock time credits")?;

    let debited = sqlx::query(
        r#"
        UPDATE time_credits
           SET credits = credits - $2, updated_at = now()
         WHERE user_id = $1 AND credits >= $2
        "#,
    )
    .bind(from)
    .bind(amount)
    .execute(&mut **tx)
    .await
    .context("debit time credits")?;

    if debited.rows_affected() == 0 {
        return Ok(false);
    }

    sqlx::query(
        r#"
        INSERT INTO time_credits (user_id, credits)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET credits = time_credits.credits + EXCLUDED.credits, updated_at = now()
        "#,
    )
    .bind(to)
    .bind(amount)
    .execute(&mut **tx)
    .await
    .context("credit time credits")?;

    Ok(true)
}

pub async fn insert_booking_tx(
    tx: &mut Transaction<'_, Postgres>,
    booking: NewBooking,
) -> anyhow::Result<Booking> {
    let row = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (swap_request_id, provider_id, recipient_id, skill_id, credits)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, swap_request_id, provider_id, recipient_id, skill_id, credits, created_at
        "#,
    )
    .bind(booking.swap_request_id)
    .bind(booking.provider_id)
    .bind(booking.recipient_id)
    .bind(booking.skill_id)
    .bind(booking.credits)
    .fetch_one(&mut **tx)
    .await
    .context("insert booking")?;
    Ok(row)
}

/// Bookings where the user either provided or received the skill.
pub async fn list_bookings(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Booking>> {
    let rows = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, swap_request_id, provider_id, recipient_id, skill_id, credits, created_at
          FROM bookings
         WHERE provider_id = $1 OR recipient_id = $1
         ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list bookings")?;
    Ok(rows)
}
