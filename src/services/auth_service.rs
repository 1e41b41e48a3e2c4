use crate::models::{RegisterForm, Role, ServiceError, User};
use crate::repositories::UserRepository;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Verify email + password against the stored user row. The caller is
    /// told only that the credentials are invalid, never which half failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        if let Some(user) = self.repository.find_by_email(email).await? {
            if let Ok(parsed_hash) = PasswordHash::new(&user.password_hash) {
                if Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok()
                {
                    return Ok(user);
                }
            }
        }

        Err(ServiceError::AuthenticationError(
            "Invalid credentials".to_string(),
        ))
    }

    /// Self-service registration. New accounts always get the member role.
    pub async fn register(&self, form: RegisterForm) -> Result<User, ServiceError> {
        let mut errors = Vec::new();
        if form.email.trim().is_empty() || !form.email.contains('@') {
            errors.push("email must be a valid address".to_string());
        }
        if form.password.len() < 8 {
            errors.push("password must be at least 8 characters long".to_string());
        }
        if form.first_name.trim().is_empty() {
            errors.push("firstName must not be empty".to_string());
        }
        if form.last_name.trim().is_empty() {
            errors.push("lastName must not be empty".to_string());
        }
        if !errors.is_empty() {
            return Err(ServiceError::ValidationError(errors));
        }

        if self.repository.find_by_email(&form.email).await?.is_some() {
            return Err(ServiceError::validation("email is already registered"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: form.email,
            password_hash: Self::hash_password(&form.password)?,
            first_name: form.first_name,
            last_name: form.last_name,
            profile_image_url: None,
            hero_image_url: None,
            linkedin_url: None,
            github_url: None,
            role: Role::Member,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&user).await?;
        tracing::info!("Registered user {}", user.email);

        Ok(user)
    }

    /// Create the bootstrap admin account if no user with the given email
    /// exists yet. Run once at startup.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Ok(());
        }

        let now = Utc::now();
        let admin = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash: Self::hash_password(password)?,
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            profile_image_url: None,
            hero_image_url: None,
            linkedin_url: None,
            github_url: None,
            role: Role::Admin,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&admin).await?;
        tracing::info!("Created bootstrap admin {}", email);

        Ok(())
    }
}
