use crate::models::{ContentEntry, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ContentEntry>, ServiceError>;
    /// At most one row per (section, field); writes are upserts.
    async fn upsert(&self, entry: &ContentEntry) -> Result<(), ServiceError>;
}

pub struct SqliteContentRepository {
    pool: SqlitePool,
}

impl SqliteContentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for SqliteContentRepository {
    async fn find_all(&self) -> Result<Vec<ContentEntry>, ServiceError> {
        let entries = sqlx::query_as::<_, ContentEntry>(
            "SELECT id, section, field, content, updated_at FROM content_entries \
             ORDER BY section, field",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn upsert(&self, entry: &ContentEntry) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO content_entries (id, section, field, content, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (section, field) \
             DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at",
        )
        .bind(&entry.id)
        .bind(&entry.section)
        .bind(&entry.field)
        .bind(&entry.content)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
