use crate::models::{Experience, ExperienceForm, ExperiencePatch, ServiceError};
use crate::repositories::ExperienceRepository;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct ExperienceService {
    repository: Arc<dyn ExperienceRepository>,
}

impl ExperienceService {
    pub fn new(repository: Arc<dyn ExperienceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Experience>, ServiceError> {
        self.repository.find_all(published_only).await
    }

    pub async fn get(&self, id: &str) -> Result<Experience, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Experience not found".to_string()))
    }

    pub async fn create(&self, form: ExperienceForm) -> Result<Experience, ServiceError> {
        let mut errors = Vec::new();
        if form.position.trim().is_empty() {
            errors.push("position must not be empty".to_string());
        }
        if form.company.trim().is_empty() {
            errors.push("company must not be empty".to_string());
        }
        if form.description.trim().is_empty() {
            errors.push("description must not be empty".to_string());
        }

        let start_date = parse_date(&form.start_date, "startDate", &mut errors);
        let end_date = form
            .end_date
            .as_deref()
            .map(|value| parse_date(value, "endDate", &mut errors));

        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        let now = Utc::now();
        let experience = Experience {
            id: Uuid::new_v4().to_string(),
            position: form.position,
            company: form.company,
            // Unwraps are safe: errors is empty, so every parse succeeded
            start_date: start_date.expect("validated above"),
            end_date: end_date.map(|date| date.expect("validated above")),
            description: form.description,
            technologies: form.technologies,
            published: form.published,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&experience).await?;
        tracing::info!("Created experience {}", experience.id);

        Ok(experience)
    }

    pub async fn update(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<Experience, ServiceError> {
        let mut experience = self.get(id).await?;
        let mut errors = Vec::new();

        if let Some(position) = patch.position {
            if position.trim().is_empty() {
                errors.push("position must not be empty".to_string());
            }
            experience.position = position;
        }
        if let Some(company) = patch.company {
            if company.trim().is_empty() {
                errors.push("company must not be empty".to_string());
            }
            experience.company = company;
        }
        if let Some(description) = patch.description {
            if description.trim().is_empty() {
                errors.push("description must not be empty".to_string());
            }
            experience.description = description;
        }
        if let Some(start_date) = patch.start_date {
            if let Some(date) = parse_date(&start_date, "startDate", &mut errors) {
                experience.start_date = date;
            }
        }
        // Some(None) means "mark as current", None leaves the end date alone
        if let Some(end_date) = patch.end_date {
            experience.end_date = match end_date {
                Some(value) => parse_date(&value, "endDate", &mut errors),
                None => None,
            };
        }
        if let Some(technologies) = patch.technologies {
            experience.technologies = technologies;
        }
        if let Some(published) = patch.published {
            experience.published = published;
        }

        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        experience.updated_at = Utc::now();
        self.repository.update(&experience).await?;

        Ok(experience)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("Experience not found".to_string()));
        }

        tracing::info!("Deleted experience {}", id);
        Ok(())
    }
}

fn parse_date(value: &str, field: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(format!("{} must be an ISO date (YYYY-MM-DD)", field));
            None
        }
    }
}
