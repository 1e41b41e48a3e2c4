use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::models::user::PublicUser;

/// The entity kinds a comment or like can attach to. Comments and likes carry
/// a (kind, id) pair instead of a typed foreign key; the kind is validated
/// against this closed set at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ItemType {
    Project,
    Experience,
    Achievement,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemType::Project => "project",
            ItemType::Experience => "experience",
            ItemType::Achievement => "achievement",
        };
        f.write_str(name)
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(ItemType::Project),
            "experience" => Ok(ItemType::Experience),
            "achievement" => Ok(ItemType::Achievement),
            other => Err(format!("unknown item type: {}", other)),
        }
    }
}

/// Database entity representing a comment. The schema permits parent chains of
/// any depth but only one level of replies is ever surfaced.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub item_type: ItemType,
    pub item_id: String,
    pub content: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment joined with its author, plus direct replies for top-level comments.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithUser {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: PublicUser,
    pub replies: Vec<CommentWithUser>,
}

/// Presence-set entry: at most one row per (user, item type, item id).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub item_type: ItemType,
    pub item_id: String,
    pub created_at: DateTime<Utc>,
}
