use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{CreateSwapRequest, CreatedSwapResponse, UpdateSwapRequest};
use super::repo_types::SwapRequestView;
use super::services;
use crate::{
    auth::extractors::AuthUser,
    dto::MessageResponse,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/swap-requests", post(create_swap_request))
        .route("/swap-requests/incoming", get(list_incoming))
        .route("/swap-requests/outgoing", get(list_outgoing))
        .route(
            "/swap-requests/:id",
            get(get_swap_request).put(update_swap_request),
        )
}

#[instrument(skip(state, body))]
pub async fn create_swap_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<CreateSwapRequest>,
) -> AppResult<(StatusCode, Json<CreatedSwapResponse>)> {
    let skill_id = body
        .skill_id
        .ok_or_else(|| AppError::Validation("skill_id is required".into()))?;
    let request = services::create_request(state.swaps.as_ref(), user_id, skill_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedSwapResponse {
            id: request.id,
            status: request.status,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_incoming(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<SwapRequestView>>> {
    Ok(Json(services::list_incoming(state.swaps.as_ref(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn list_outgoing(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<SwapRequestView>>> {
    Ok(Json(services::list_outgoing(state.swaps.as_ref(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn get_swap_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SwapRequestView>> {
    Ok(Json(services::get_request(state.swaps.as_ref(), user_id, id).await?))
}

/// Takes the raw body: a malformed one must not short-circuit the
/// responder check with a 400.
#[instrument(skip(state, body))]
pub async fn update_swap_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let body = UpdateSwapRequest::from_body(&body);
    let updated = services::update_status(
        state.swaps.as_ref(),
        &state.config.credits,
        user_id,
        id,
        body.action(),
    )
    .await?;
    Ok(Json(MessageResponse::new(format!("Request {}", updated.status))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swaps::memory::MemorySwapStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_requires_skill_id() {
        let state = AppState::fake();
        let err = create_swap_request(
            State(state),
            AuthUser(Uuid::new_v4()),
            AppJson(CreateSwapRequest { skill_id: None }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn handlers_drive_the_accept_flow() {
        let store = Arc::new(MemorySwapStore::default());
        let alice = store.add_user("Alice", 2);
        let bob = store.add_user("Bob", 2);
        let guitar = store.add_skill(alice, "Guitar Lessons");
        let state = AppState::fake_with_swaps(store.clone());

        let (status, Json(created)) = create_swap_request(
            State(state.clone()),
            AuthUser(bob),
            AppJson(CreateSwapRequest {
                skill_id: Some(guitar),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["status"], "pending");

        let Json(msg) = update_swap_request(
            State(state.clone()),
            AuthUser(alice),
            Path(created.id),
            Bytes::from_static(br#"{"action":"accept"}"#),
        )
        .await
        .unwrap();
        assert_eq!(msg.message, "Request accepted");

        let err = update_swap_request(
            State(state.clone()),
            AuthUser(alice),
            Path(created.id),
            Bytes::from_static(br#"{"action":"reject"}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let Json(view) = get_swap_request(State(state), AuthUser(bob), Path(created.id))
            .await
            .unwrap();
        assert_eq!(view.status, "accepted");
    }

    #[tokio::test]
    async fn missing_action_is_bad_request_for_responder() {
        let store = Arc::new(MemorySwapStore::default());
        let alice = store.add_user("Alice", 2);
        let bob = store.add_user("Bob", 2);
        let guitar = store.add_skill(alice, "Guitar Lessons");
        let state = AppState::fake_with_swaps(store);

        let (_, Json(created)) = create_swap_request(
            State(state.clone()),
            AuthUser(bob),
            AppJson(CreateSwapRequest {
                skill_id: Some(guitar),
            }),
        )
        .await
        .unwrap();

        let err = update_swap_request(
            State(state),
            AuthUser(alice),
            Path(created.id),
            Bytes::from_static(b"{}"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_update_body_still_checks_responder_first() {
        let store = Arc::new(MemorySwapStore::default());
        let alice = store.add_user("Alice", 2);
        let bob = store.add_user("Bob", 2);
        let carol = store.add_user("Carol", 2);
        let guitar = store.add_skill(alice, "Guitar Lessons");
        let state = AppState::fake_with_swaps(store.clone());

        let (_, Json(created)) = create_swap_request(
            State(state.clone()),
            AuthUser(bob),
            AppJson(CreateSwapRequest {
                skill_id: Some(guitar),
            }),
        )
        .await
        .unwrap();

        let bodies: [&[u8]; 4] = [br#"{"action":5}"#, b"", b"not json", br#"{"action":["accept"]}"#];
        for body in bodies {
            for outsider in [bob, carol] {
                let err = update_swap_request(
                    State(state.clone()),
                    AuthUser(outsider),
                    Path(created.id),
                    Bytes::copy_from_slice(body),
                )
                .await
                .unwrap_err();
                assert_eq!(err.status(), StatusCode::FORBIDDEN);
            }

            let err = update_swap_request(
                State(state.clone()),
                AuthUser(alice),
                Path(created.id),
                Bytes::copy_from_slice(body),
            )
            .await
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidOperation(_)));
        }

        assert_eq!(store.balance(bob), 2);
        assert!(store.bookings().is_empty());
    }
}
