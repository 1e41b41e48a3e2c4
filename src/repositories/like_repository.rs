use crate::models::social::ItemType;
use crate::models::{Like, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Conditional insert guarded by the (user_id, item_type, item_id)
    /// uniqueness constraint. Returns true if a row was inserted, false if
    /// the like already existed. No separate read step, so concurrent
    /// toggles cannot both observe "absent".
    async fn insert_if_absent(&self, like: &Like) -> Result<bool, ServiceError>;
    async fn delete_for(
        &self,
        user_id: &str,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<u64, ServiceError>;
    async fn count_for(&self, item_type: ItemType, item_id: &str) -> Result<i64, ServiceError>;
    async fn exists_for(
        &self,
        user_id: &str,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<bool, ServiceError>;
}

pub struct SqliteLikeRepository {
    pool: SqlitePool,
}

impl SqliteLikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqliteLikeRepository {
    async fn insert_if_absent(&self, like: &Like) -> Result<bool, ServiceError> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO likes (id, user_id, item_type, item_id, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&like.id)
        .bind(&like.user_id)
        .bind(like.item_type)
        .bind(&like.item_id)
        .bind(like.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_for(
        &self,
        user_id: &str,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<u64, ServiceError> {
        let result =
            sqlx::query("DELETE FROM likes WHERE user_id = ? AND item_type = ? AND item_id = ?")
                .bind(user_id)
                .bind(item_type)
                .bind(item_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn count_for(&self, item_type: ItemType, item_id: &str) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM likes WHERE item_type = ? AND item_id = ?",
        )
        .bind(item_type)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn exists_for(
        &self,
        user_id: &str,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<bool, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM likes WHERE user_id = ? AND item_type = ? AND item_id = ?",
        )
        .bind(user_id)
        .bind(item_type)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
