use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{ProfileResponse, UpdateProfileRequest},
    repo,
};
use crate::{
    auth::extractors::AuthUser, credits::repo as ledger, dto::MessageResponse, error::AppResult,
    extract::AppJson, state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(put_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let profile = repo::find(&state.db, user_id).await?;
    let credits = ledger::balance(&state.db, user_id).await?;
    Ok(Json(ProfileResponse::new(profile, credits)))
}

#[instrument(skip(state, body))]
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    repo::upsert(
        &state.db,
        user_id,
        body.name.as_deref(),
        body.bio.as_deref(),
        body.avatar_url.as_deref(),
    )
    .await?;
    info!(%user_id, "profile updated");
    Ok(Json(MessageResponse::new("Profile updated")))
}
