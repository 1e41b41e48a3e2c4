use crate::models::{ServiceError, StoredFile};
use crate::repositories::FileRepository;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10MB

const ALLOWED_MIMETYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

pub struct UploadService {
    repository: Arc<dyn FileRepository>,
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(repository: Arc<dyn FileRepository>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            upload_dir: upload_dir.into(),
        }
    }

    /// Write the uploaded bytes to the upload directory under a
    /// collision-free name and record the file row.
    pub async fn save(
        &self,
        original_name: &str,
        mimetype: &str,
        data: Vec<u8>,
        uploaded_by: &str,
    ) -> Result<StoredFile, ServiceError> {
        if !ALLOWED_MIMETYPES.contains(&mimetype) {
            return Err(ServiceError::validation(
                "Only images (JPEG, PNG, GIF, WebP) are allowed",
            ));
        }
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(ServiceError::validation("File exceeds the 10MB limit"));
        }

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| {
                ServiceError::InternalError(format!("Failed to create upload directory: {}", e))
            })?;

        let filename = unique_filename(original_name);
        let path = self.upload_dir.join(&filename);

        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| ServiceError::InternalError(format!("Failed to write file: {}", e)))?;

        let file = StoredFile {
            id: Uuid::new_v4().to_string(),
            filename: filename.clone(),
            original_name: original_name.to_string(),
            mimetype: mimetype.to_string(),
            size: data.len() as i64,
            path: path.display().to_string(),
            url: format!("/uploads/{}", filename),
            uploaded_by: uploaded_by.to_string(),
            created_at: Utc::now(),
        };

        self.repository.insert(&file).await?;
        tracing::info!("Stored upload {} ({} bytes)", file.filename, file.size);

        Ok(file)
    }
}

/// Keep the original stem for readability, but suffix a uuid so uploads of
/// the same file never clobber each other. The stem is sanitized because it
/// ends up in a filesystem path.
fn unique_filename(original_name: &str) -> String {
    let path = Path::new(original_name);
    let stem: String = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let stem = if stem.is_empty() {
        "file".to_string()
    } else {
        stem
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, Uuid::new_v4(), ext),
        None => format!("{}-{}", stem, Uuid::new_v4()),
    }
}

#[cfg(test)]
mod tests {
    use super::unique_filename;

    #[test]
    fn keeps_stem_and_extension() {
        let name = unique_filename("headshot.png");
        assert!(name.starts_with("headshot-"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn strips_path_separators_and_odd_characters() {
        let name = unique_filename("../../etc/pass wd.png");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert!(!name.contains(' '));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn falls_back_when_stem_is_unusable() {
        let name = unique_filename("???");
        assert!(name.starts_with("file-"));
    }

    #[test]
    fn two_uploads_never_collide() {
        assert_ne!(unique_filename("a.png"), unique_filename("a.png"));
    }
}
