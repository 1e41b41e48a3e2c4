use crate::models::{Achievement, AchievementForm, AchievementPatch, ServiceError};
use crate::repositories::AchievementRepository;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct AchievementService {
    repository: Arc<dyn AchievementRepository>,
}

impl AchievementService {
    pub fn new(repository: Arc<dyn AchievementRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Achievement>, ServiceError> {
        self.repository.find_all(published_only).await
    }

    pub async fn get(&self, id: &str) -> Result<Achievement, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Achievement not found".to_string()))
    }

    pub async fn create(&self, form: AchievementForm) -> Result<Achievement, ServiceError> {
        let mut errors = Vec::new();
        if form.title.trim().is_empty() {
            errors.push("title must not be empty".to_string());
        }
        if form.description.trim().is_empty() {
            errors.push("description must not be empty".to_string());
        }
        let date = parse_date(&form.date, &mut errors);

        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        let now = Utc::now();
        let achievement = Achievement {
            id: Uuid::new_v4().to_string(),
            title: form.title,
            description: form.description,
            date: date.expect("validated above"),
            achievement_type: form.achievement_type,
            certificate_url: form.certificate_url,
            published: form.published,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&achievement).await?;
        tracing::info!("Created achievement {}", achievement.id);

        Ok(achievement)
    }

    pub async fn update(
        &self,
        id: &str,
        patch: AchievementPatch,
    ) -> Result<Achievement, ServiceError> {
        let mut achievement = self.get(id).await?;
        let mut errors = Vec::new();

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                errors.push("title must not be empty".to_string());
            }
            achievement.title = title;
        }
        if let Some(description) = patch.description {
            if description.trim().is_empty() {
                errors.push("description must not be empty".to_string());
            }
            achievement.description = description;
        }
        if let Some(date) = patch.date {
            if let Some(parsed) = parse_date(&date, &mut errors) {
                achievement.date = parsed;
            }
        }
        if let Some(achievement_type) = patch.achievement_type {
            achievement.achievement_type = achievement_type;
        }
        if let Some(certificate_url) = patch.certificate_url {
            achievement.certificate_url = Some(certificate_url);
        }
        if let Some(published) = patch.published {
            achievement.published = published;
        }

        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        achievement.updated_at = Utc::now();
        self.repository.update(&achievement).await?;

        Ok(achievement)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("Achievement not found".to_string()));
        }

        tracing::info!("Deleted achievement {}", id);
        Ok(())
    }
}

fn parse_date(value: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("date must be an ISO date (YYYY-MM-DD)".to_string());
            None
        }
    }
}
