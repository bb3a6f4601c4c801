use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{CredentialsRequest, PublicUser, TokenResponse},
        extractors::AuthUser,
        repo_types::User,
        services,
    },
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn required(payload: CredentialsRequest) -> AppResult<(String, String)> {
    payload.into_parts().ok_or_else(|| {
        warn!("missing email or password");
        AppError::Validation("Email and password required".into())
    })
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let (email, password) = required(payload)?;
    let (_, token) = services::register(&state, &email, &password).await?;
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (email, password) = required(payload)?;
    let (_, token) = services::authenticate(&state, &email, &password).await?;
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = User::find_by_id(&state.db, user_id).await?.ok_or_else(|| {
        warn!(user_id = %user_id, "token for unknown user");
        AppError::Unauthenticated("User not found".into())
    })?;

    Ok(Json(PublicUser {
        id: user.id,
        email: user.email,
    }))
}
