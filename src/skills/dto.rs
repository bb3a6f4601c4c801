use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_offered: Option<bool>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewSkill {
    pub skill_name: String,
    pub description: Option<String>,
    pub is_offered: bool,
}

impl CreateSkillRequest {
    /// Name is required; skills are offered unless stated otherwise.
    pub fn validate(self) -> AppResult<NewSkill> {
        let skill_name = self
            .skill_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("skill_name is required".into()))?;
        Ok(NewSkill {
            skill_name,
            description: self.description,
            is_offered: self.is_offered.unwrap_or(true),
        })
    }
}
