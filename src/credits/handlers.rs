use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::{repo, repo_types::Booking};
use crate::{auth::extractors::AuthUser, error::AppResult, state::AppState};

pub fn bookings_routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings))
}

#[instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Booking>>> {
    let rows = repo::list_bookings(&state.db, user_id).await?;
    Ok(Json(rows))
}
