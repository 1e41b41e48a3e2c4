use crate::models::{Achievement, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Achievement>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Achievement>, ServiceError>;
    async fn insert(&self, achievement: &Achievement) -> Result<(), ServiceError>;
    async fn update(&self, achievement: &Achievement) -> Result<(), ServiceError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

pub struct SqliteAchievementRepository {
    pool: SqlitePool,
}

impl SqliteAchievementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const ACHIEVEMENT_COLUMNS: &str = "id, title, description, date, type AS achievement_type, \
                                   certificate_url, published, created_at, updated_at";

#[async_trait]
impl AchievementRepository for SqliteAchievementRepository {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Achievement>, ServiceError> {
        let query = if published_only {
            format!(
                "SELECT {} FROM achievements WHERE published = 1 ORDER BY date DESC",
                ACHIEVEMENT_COLUMNS
            )
        } else {
            format!(
                "SELECT {} FROM achievements ORDER BY date DESC",
                ACHIEVEMENT_COLUMNS
            )
        };

        let achievements = sqlx::query_as::<_, Achievement>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(achievements)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Achievement>, ServiceError> {
        let achievement = sqlx::query_as::<_, Achievement>(&format!(
            "SELECT {} FROM achievements WHERE id = ?",
            ACHIEVEMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(achievement)
    }

    async fn insert(&self, achievement: &Achievement) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO achievements (id, title, description, date, type, certificate_url, \
                                       published, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&achievement.id)
        .bind(&achievement.title)
        .bind(&achievement.description)
        .bind(achievement.date)
        .bind(achievement.achievement_type)
        .bind(&achievement.certificate_url)
        .bind(achievement.published)
        .bind(achievement.created_at)
        .bind(achievement.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, achievement: &Achievement) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE achievements SET title = ?, description = ?, date = ?, type = ?, \
                                     certificate_url = ?, published = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&achievement.title)
        .bind(&achievement.description)
        .bind(achievement.date)
        .bind(achievement.achievement_type)
        .bind(&achievement.certificate_url)
        .bind(achievement.published)
        .bind(achievement.updated_at)
        .bind(&achievement.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
