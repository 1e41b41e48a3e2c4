use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Record of an uploaded file. The physical file lives under the upload
/// directory; `url` is the public path it is served from.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub mimetype: String,
    pub size: i64,
    pub path: String,
    pub url: String,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}
