use crate::models::{ContentEntry, ServiceError};
use crate::repositories::ContentRepository;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// Assemble all overrides into {section: {field: content}}. Sections with
    /// no overrides are simply absent; the client falls back to its defaults.
    pub async fn get_all(
        &self,
    ) -> Result<BTreeMap<String, BTreeMap<String, String>>, ServiceError> {
        let entries = self.repository.find_all().await?;

        let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for entry in entries {
            sections
                .entry(entry.section)
                .or_default()
                .insert(entry.field, entry.content);
        }

        Ok(sections)
    }

    /// Upsert keyed on (section, field). The content itself may be empty;
    /// clearing a field to an empty string is a legitimate edit.
    pub async fn set(
        &self,
        section: &str,
        field: &str,
        content: String,
    ) -> Result<(), ServiceError> {
        let mut errors = Vec::new();
        if section.trim().is_empty() {
            errors.push("section must not be empty".to_string());
        }
        if field.trim().is_empty() {
            errors.push("field must not be empty".to_string());
        }
        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        let entry = ContentEntry {
            id: Uuid::new_v4().to_string(),
            section: section.trim().to_string(),
            field: field.trim().to_string(),
            content,
            updated_at: Utc::now(),
        };

        self.repository.upsert(&entry).await?;
        tracing::info!("Updated content {}.{}", entry.section, entry.field);

        Ok(())
    }
}
