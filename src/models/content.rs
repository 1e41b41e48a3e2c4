use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single (section, field) -> content override. Lets an admin replace
/// default UI copy without a schema migration.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct ContentEntry {
    pub id: String,
    pub section: String,
    pub field: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}
