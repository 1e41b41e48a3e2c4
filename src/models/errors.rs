use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    ValidationError(Vec<String>),
    AuthenticationError(String),
    AuthorizationError(String),
    NotFound(String),
    DatabaseError(String),
    InternalError(String),
}

impl ServiceError {
    /// Single-field validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        ServiceError::ValidationError(vec![msg.into()])
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ValidationError(errors) => {
                write!(f, "Validation error: {}", errors.join("; "))
            }
            ServiceError::AuthenticationError(msg) => write!(f, "Authentication error: {}", msg),
            ServiceError::AuthorizationError(msg) => write!(f, "Authorization error: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for ServiceError {}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::ValidationError(errors) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Validation error",
                "errors": errors
            })),
            ServiceError::AuthenticationError(msg) => HttpResponse::Unauthorized().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::AuthorizationError(msg) => HttpResponse::Forbidden().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Database error occurred"
                }))
            }
            ServiceError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::DatabaseError(err.to_string())
    }
}
