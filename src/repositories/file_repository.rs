use crate::models::{ServiceError, StoredFile};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn insert(&self, file: &StoredFile) -> Result<(), ServiceError>;
}

pub struct SqliteFileRepository {
    pool: SqlitePool,
}

impl SqliteFileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for SqliteFileRepository {
    async fn insert(&self, file: &StoredFile) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO files (id, filename, original_name, mimetype, size, path, url, \
                                uploaded_by, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&file.id)
        .bind(&file.filename)
        .bind(&file.original_name)
        .bind(&file.mimetype)
        .bind(file.size)
        .bind(&file.path)
        .bind(&file.url)
        .bind(&file.uploaded_by)
        .bind(file.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
