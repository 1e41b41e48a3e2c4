use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::achievement::AchievementType;
use crate::models::social::ItemType;
use crate::models::user::PublicUser;

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Full project payload for create. Dates and lists are validated server-side;
/// flags default to false like the original insert schema.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
}

/// Partial project payload for update. Absent fields are left untouched.
#[derive(Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceForm {
    pub position: String,
    pub company: String,
    /// ISO date, e.g. "2023-04-01"
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub position: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    /// Double-option so "set to null" (currently employed) and "leave
    /// untouched" stay distinguishable in the JSON payload.
    #[serde(default, with = "serde_double_option")]
    pub end_date: Option<Option<String>>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub published: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementForm {
    pub title: String,
    pub description: String,
    /// ISO date, e.g. "2024-11-20"
    pub date: String,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub achievement_type: Option<AchievementType>,
    pub certificate_url: Option<String>,
    pub published: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentForm {
    pub item_type: ItemType,
    pub item_id: String,
    pub content: String,
    pub parent_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeForm {
    pub item_type: ItemType,
    pub item_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ContentForm {
    pub section: String,
    pub field: String,
    pub content: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentImageForm {
    pub section: String,
    pub field: String,
    pub image_url: String,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_in: u64, // seconds
    pub user: PublicUser,
}

#[derive(Serialize, ToSchema)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub count: i64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub count: i64,
    pub user_liked: bool,
}

#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub url: String,
}

/// Serde helper for `Option<Option<T>>` patch fields: a missing key
/// deserializes to None (untouched), an explicit null to Some(None).
mod serde_double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
