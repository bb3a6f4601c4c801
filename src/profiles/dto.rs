use serde::{Deserialize, Serialize};

use super::repo::Profile;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub time_credits: i32,
}

impl ProfileResponse {
    /// A user without a profile row still gets a well-formed response.
    pub fn new(profile: Option<Profile>, time_credits: i32) -> Self {
        let (name, bio, avatar_url) = match profile {
            Some(p) => (p.name, p.bio, p.avatar_url),
            None => (None, None, None),
        };
        Self {
            name,
            bio,
            avatar_url,
            time_credits,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
