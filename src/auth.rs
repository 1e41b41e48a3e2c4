use actix_web::HttpRequest;
use base64::Engine;
use chrono::{Duration, Utc};
use rand::RngCore;
use sqlx::SqlitePool;

use crate::models::{ServiceError, User};

/// Sessions live for one week unless destroyed by logout.
pub const SESSION_TTL_SECONDS: u64 = 7 * 24 * 3600;

/// Server-side session store. Tokens are opaque random strings persisted in
/// the sessions table so logout can actually destroy them.
#[derive(Clone)]
pub struct SessionManager {
    pool: SqlitePool,
}

impl SessionManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a session row for the user and return the bearer token.
    /// Expired rows are swept here so the table does not grow unbounded.
    pub async fn create_session(&self, user_id: &str) -> Result<String, ServiceError> {
        self.purge_expired().await?;

        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);

        let expires_at = Utc::now() + Duration::seconds(SESSION_TTL_SECONDS as i64);
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user_id)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(token)
    }

    /// Resolve a token to its user. Expired or unknown tokens resolve to None.
    pub async fn resolve(&self, token: &str) -> Result<Option<User>, ServiceError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.email, u.password_hash, u.first_name, u.last_name, \
                    u.profile_image_url, u.hero_image_url, u.linkedin_url, u.github_url, \
                    u.role, u.created_at, u.updated_at \
             FROM sessions s \
             JOIN users u ON u.id = s.user_id \
             WHERE s.token = ? AND s.expires_at > ?",
        )
        .bind(token)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Drop every session past its expiry.
    pub async fn purge_expired(&self) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Destroy a session. Unknown tokens are a no-op.
    pub async fn destroy(&self, token: &str) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let token = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    Some(token.to_string())
}
