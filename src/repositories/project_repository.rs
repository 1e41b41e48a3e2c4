use crate::models::{Project, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Project>, ServiceError>;
    async fn find_featured(&self) -> Result<Vec<Project>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ServiceError>;
    async fn insert(&self, project: &Project) -> Result<(), ServiceError>;
    async fn update(&self, project: &Project) -> Result<(), ServiceError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Raw row with technologies still serialized as JSON text.
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    title: String,
    description: String,
    image_url: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    technologies: String,
    featured: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            github_url: row.github_url,
            live_url: row.live_url,
            technologies: serde_json::from_str(&row.technologies).unwrap_or_default(),
            featured: row.featured,
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
impl ProjectRepository for SqliteProjectRepository {
    async fn find_all(&self, published_only: bool) -> Result<Vec<Project>, ServiceError> {
        let query = if published_only {
            "SELECT * FROM projects WHERE published = 1 ORDER BY created_at DESC"
        } else {
            "SELECT * FROM projects ORDER BY created_at DESC"
        };

        let rows = sqlx::query_as::<_, ProjectRow>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_featured(&self) -> Result<Vec<Project>, ServiceError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE published = 1 AND featured = 1 ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ServiceError> {
        let row = sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Project::from))
    }

    async fn insert(&self, project: &Project) -> Result<(), ServiceError> {
        let technologies = serialize_technologies(&project.technologies)?;

        sqlx::query(
            "INSERT INTO projects (id, title, description, image_url, github_url, live_url, \
                                   technologies, featured, published, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(technologies)
        .bind(project.featured)
        .bind(project.published)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), ServiceError> {
        let technologies = serialize_technologies(&project.technologies)?;

        sqlx::query(
            "UPDATE projects SET title = ?, description = ?, image_url = ?, github_url = ?, \
                                 live_url = ?, technologies = ?, featured = ?, published = ?, \
                                 updated_at = ? \
             WHERE id = ?",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(technologies)
        .bind(project.featured)
        .bind(project.published)
        .bind(project.updated_at)
        .bind(&project.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
