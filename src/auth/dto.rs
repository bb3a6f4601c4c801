use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for signup and login. Fields are optional so that a
/// missing one surfaces as a 400 with a message.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Both fields present and non-empty.
    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.email, self.password) {
            (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => Some((e, p)),
            _ => None,
        }
    }
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}
