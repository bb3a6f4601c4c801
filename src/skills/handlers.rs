use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::CreateSkillRequest,
    repo,
    repo_types::{OfferedSkill, Skill},
};
use crate::{auth::extractors::AuthUser, error::AppResult, extract::AppJson, state::AppState};

pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_own_skills).post(add_skill))
        .route("/skills/all", get(list_offered_skills))
}

#[instrument(skip(state))]
pub async fn list_own_skills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(repo::list_by_user(&state.db, user_id).await?))
}

#[instrument(skip(state, body))]
pub async fn add_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<CreateSkillRequest>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    let new = body.validate()?;
    let skill = repo::create(
        &state.db,
        user_id,
        &new.skill_name,
        new.description.as_deref(),
        new.is_offered,
    )
    .await?;
    info!(%user_id, skill_id = %skill.id, offered = skill.is_offered, "skill added");
    Ok((StatusCode::CREATED, Json(skill)))
}

#[instrument(skip(state))]
pub async fn list_offered_skills(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> AppResult<Json<Vec<OfferedSkill>>> {
    Ok(Json(repo::list_offered(&state.db).await?))
}
