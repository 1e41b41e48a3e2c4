use crate::models::{Comment, PublicUser, ServiceError};
use crate::models::social::ItemType;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_top_level(
        &self,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Vec<(Comment, PublicUser)>, ServiceError>;
    async fn find_replies(&self, parent_id: &str)
        -> Result<Vec<(Comment, PublicUser)>, ServiceError>;
    async fn find_recent(&self, limit: i64) -> Result<Vec<(Comment, PublicUser)>, ServiceError>;
    async fn insert(&self, comment: &Comment) -> Result<(), ServiceError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const COMMENT_WITH_AUTHOR: &str = "SELECT c.id, c.user_id, c.item_type, c.item_id, c.content, \
            c.parent_id, c.created_at, c.updated_at, \
            u.id AS author_id, u.email AS author_email, u.first_name AS author_first_name, \
            u.last_name AS author_last_name, u.profile_image_url AS author_profile_image_url, \
            u.hero_image_url AS author_hero_image_url, u.linkedin_url AS author_linkedin_url, \
            u.github_url AS author_github_url, u.role AS author_role, \
            u.created_at AS author_created_at, u.updated_at AS author_updated_at \
     FROM comments c \
     JOIN users u ON u.id = c.user_id";

fn map_comment_row(row: &SqliteRow) -> Result<(Comment, PublicUser), sqlx::Error> {
    let comment = Comment {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        item_type: row.try_get("item_type")?,
        item_id: row.try_get("item_id")?,
        content: row.try_get("content")?,
        parent_id: row.try_get("parent_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    };

    let author = PublicUser {
        id: row.try_get("author_id")?,
        email: row.try_get("author_email")?,
        first_name: row.try_get("author_first_name")?,
        last_name: row.try_get("author_last_name")?,
        profile_image_url: row.try_get("author_profile_image_url")?,
        hero_image_url: row.try_get("author_hero_image_url")?,
        linkedin_url: row.try_get("author_linkedin_url")?,
        github_url: row.try_get("author_github_url")?,
        role: row.try_get("author_role")?,
        created_at: row.try_get("author_created_at")?,
        updated_at: row.try_get("author_updated_at")?,
    };

    Ok((comment, author))
}

fn map_comment_rows(rows: Vec<SqliteRow>) -> Result<Vec<(Comment, PublicUser)>, ServiceError> {
    rows.iter()
        .map(|row| map_comment_row(row).map_err(ServiceError::from))
        .collect()
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn find_top_level(
        &self,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Vec<(Comment, PublicUser)>, ServiceError> {
        let rows = sqlx::query(&format!(
            "{} WHERE c.item_type = ? AND c.item_id = ? AND c.parent_id IS NULL \
             ORDER BY c.created_at DESC",
            COMMENT_WITH_AUTHOR
        ))
        .bind(item_type)
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        map_comment_rows(rows)
    }

    async fn find_replies(
        &self,
        parent_id: &str,
    ) -> Result<Vec<(Comment, PublicUser)>, ServiceError> {
        // Replies are shown oldest first, unlike top-level comments
        let rows = sqlx::query(&format!(
            "{} WHERE c.parent_id = ? ORDER BY c.created_at ASC",
            COMMENT_WITH_AUTHOR
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        map_comment_rows(rows)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<(Comment, PublicUser)>, ServiceError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY c.created_at DESC LIMIT ?",
            COMMENT_WITH_AUTHOR
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        map_comment_rows(rows)
    }

    async fn insert(&self, comment: &Comment) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO comments (id, user_id, item_type, item_id, content, parent_id, \
                                   created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&comment.id)
        .bind(&comment.user_id)
        .bind(comment.item_type)
        .bind(&comment.item_id)
        .bind(&comment.content)
        .bind(&comment.parent_id)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
