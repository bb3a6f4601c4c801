use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::status::SwapStatus;

#[derive(Debug, Deserialize)]
pub struct CreateSwapRequest {
    pub skill_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CreatedSwapResponse {
    pub id: Uuid,
    pub status: SwapStatus,
}

/// Body of a status update. Read leniently: whatever the client sends,
/// the responder check runs before the action is looked at.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSwapRequest {
    #[serde(default)]
    pub action: Option<Value>,
}

impl UpdateSwapRequest {
    /// Unparseable bodies behave like a body with no action.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Non-string actions read as empty and fail action parsing later.
    pub fn action(&self) -> &str {
        self.action.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}
