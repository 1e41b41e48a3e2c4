use crate::models::{Project, ProjectForm, ProjectPatch, ServiceError};
use crate::repositories::ProjectRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Project>, ServiceError> {
        self.repository.find_all(published_only).await
    }

    pub async fn list_featured(&self) -> Result<Vec<Project>, ServiceError> {
        self.repository.find_featured().await
    }

    pub async fn get(&self, id: &str) -> Result<Project, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Project not found".to_string()))
    }

    pub async fn create(&self, form: ProjectForm) -> Result<Project, ServiceError> {
        validate(&form.title, &form.description)?;

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: form.title,
            description: form.description,
            image_url: form.image_url,
            github_url: form.github_url,
            live_url: form.live_url,
            technologies: form.technologies,
            featured: form.featured,
            published: form.published,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&project).await?;
        tracing::info!("Created project {}", project.id);

        Ok(project)
    }

    /// Patch semantics: absent fields stay untouched, updated_at is
    /// refreshed. Validation runs against the patched result so an update
    /// cannot blank out a required field.
    pub async fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project, ServiceError> {
        let mut project = self.get(id).await?;

        if let Some(title) = patch.title {
            project.title = title;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        if let Some(image_url) = patch.image_url {
            project.image_url = Some(image_url);
        }
        if let Some(github_url) = patch.github_url {
            project.github_url = Some(github_url);
        }
        if let Some(live_url) = patch.live_url {
            project.live_url = Some(live_url);
        }
        if let Some(technologies) = patch.technologies {
            project.technologies = technologies;
        }
        if let Some(featured) = patch.featured {
            project.featured = featured;
        }
        if let Some(published) = patch.published {
            project.published = published;
        }

        validate(&project.title, &project.description)?;

        project.updated_at = Utc::now();
        self.repository.update(&project).await?;

        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("Project not found".to_string()));
        }

        tracing::info!("Deleted project {}", id);
        Ok(())
    }
}

fn validate(title: &str, description: &str) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push("title must not be empty".to_string());
    }
    if description.trim().is_empty() {
        errors.push("description must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::ValidationError(errors))
    }
}
