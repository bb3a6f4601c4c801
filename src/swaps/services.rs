use tracing::{info, warn};
use uuid::Uuid;

use super::repo_types::{Resolution, SwapRequest, SwapRequestView};
use super::status::{SwapAction, SwapStatus};
use super::store::SwapStore;
use crate::config::CreditConfig;
use crate::error::{AppError, AppResult};

pub async fn create_request(
    store: &dyn SwapStore,
    requester_id: Uuid,
    skill_id: Uuid,
) -> AppResult<SwapRequest> {
    let responder_id = store
        .skill_owner(skill_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

    if responder_id == requester_id {
        warn!(%requester_id, %skill_id, "self swap request refused");
        return Err(AppError::InvalidOperation(
            "Cannot request your own skill".into(),
        ));
    }

    let request = store
        .insert_pending(requester_id, responder_id, skill_id)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("A pending request for this skill already exists".into())
        })?;

    info!(
        request_id = %request.id,
        %requester_id,
        %responder_id,
        %skill_id,
        "swap request created"
    );
    Ok(request)
}

pub async fn list_incoming(store: &dyn SwapStore, user_id: Uuid) -> AppResult<Vec<SwapRequestView>> {
    Ok(store.list_incoming(user_id).await?)
}

pub async fn list_outgoing(store: &dyn SwapStore, user_id: Uuid) -> AppResult<Vec<SwapRequestView>> {
    Ok(store.list_outgoing(user_id).await?)
}

/// Visible to both parties and nobody else.
pub async fn get_request(
    store: &dyn SwapStore,
    user_id: Uuid,
    request_id: Uuid,
) -> AppResult<SwapRequestView> {
    let view = store
        .find_view(request_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Swap request not found".into()))?;
    if view.requester_id != user_id && view.responder_id != user_id {
        return Err(AppError::Forbidden("Not authorized".into()));
    }
    Ok(view)
}

/// Responder's accept/reject. Checks run in a fixed order: existence,
/// authorization, action, then the conditional write.
pub async fn update_status(
    store: &dyn SwapStore,
    credits: &CreditConfig,
    user_id: Uuid,
    request_id: Uuid,
    action: &str,
) -> AppResult<SwapRequest> {
    let request = store
        .find(request_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Swap request not found".into()))?;

    if request.responder_id != user_id {
        warn!(%user_id, %request_id, "non-responder tried to resolve swap request");
        return Err(AppError::Forbidden("Not authorized".into()));
    }

    let action: SwapAction = action
        .parse()
        .map_err(|e: super::status::UnknownAction| AppError::InvalidOperation(e.to_string()))?;

    let target = request
        .status
        .apply(action)
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    let cost = match target {
        SwapStatus::Accepted => credits.swap_cost,
        _ => 0,
    };

    match store.resolve(&request, target, cost).await? {
        Resolution::Resolved(updated) => {
            info!(%request_id, status = %updated.status, credits = cost, "swap request resolved");
            Ok(updated)
        }
        Resolution::AlreadyResolved => {
            warn!(%request_id, "swap request resolved concurrently");
            Err(AppError::Conflict("Swap request already resolved".into()))
        }
        Resolution::InsufficientCredits => {
            warn!(%request_id, requester_id = %request.requester_id, "insufficient time credits");
            Err(AppError::Conflict(
                "Requester has insufficient time credits".into(),
            ))
        }
    }
}
