use crate::models::{Experience, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Experience>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ServiceError>;
    async fn insert(&self, experience: &Experience) -> Result<(), ServiceError>;
    async fn update(&self, experience: &Experience) -> Result<(), ServiceError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

pub struct SqliteExperienceRepository {
    pool: SqlitePool,
}

impl SqliteExperienceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: String,
    position: String,
    company: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    description: String,
    technologies: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            position: row.position,
            company: row.company,
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description,
            technologies: serde_json::from_str(&row.technologies).unwrap_or_default(),
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn serialize_technologies(technologies: &[String]) -> Result<String, ServiceError> {
    serde_json::to_string(technologies)
        .map_err(|e| ServiceError::InternalError(format!("Failed to serialize technologies: {}", e)))
}

#[async_trait]
impl ExperienceRepository for SqliteExperienceRepository {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Experience>, ServiceError> {
        // Experiences are ordered by start date, not creation time
        let query = if published_only {
            "SELECT * FROM experiences WHERE published = 1 ORDER BY start_date DESC"
        } else {
            "SELECT * FROM experiences ORDER BY start_date DESC"
        };

        let rows = sqlx::query_as::<_, ExperienceRow>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Experience::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ServiceError> {
        let row = sqlx::query_as::<_, ExperienceRow>("SELECT * FROM experiences WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Experience::from))
    }

    async fn insert(&self, experience: &Experience) -> Result<(), ServiceError> {
        let technologies = serialize_technologies(&experience.technologies)?;

        sqlx::query(
            "INSERT INTO experiences (id, position, company, start_date, end_date, description, \
                                      technologies, published, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&experience.id)
        .bind(&experience.position)
        .bind(&experience.company)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .bind(technologies)
        .bind(experience.published)
        .bind(experience.created_at)
        .bind(experience.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, experience: &Experience) -> Result<(), ServiceError> {
        let technologies = serialize_technologies(&experience.technologies)?;

        sqlx::query(
            "UPDATE experiences SET position = ?, company = ?, start_date = ?, end_date = ?, \
                                    description = ?, technologies = ?, published = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&experience.position)
        .bind(&experience.company)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .bind(technologies)
        .bind(experience.published)
        .bind(experience.updated_at)
        .bind(&experience.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
