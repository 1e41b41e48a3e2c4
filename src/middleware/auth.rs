use actix_web::HttpRequest;

use crate::auth::{extract_token_from_header, SessionManager};
use crate::models::{ServiceError, User};

/// Resolve the request's bearer token to a user, or 401.
pub async fn authenticate_request(
    req: &HttpRequest,
    sessions: &SessionManager,
) -> Result<User, ServiceError> {
    let token = extract_token_from_header(req).ok_or_else(|| {
        ServiceError::AuthenticationError("Missing Authorization header".to_string())
    })?;

    sessions
        .resolve(&token)
        .await?
        .ok_or_else(|| ServiceError::AuthenticationError("Invalid or expired session".to_string()))
}

/// Authenticate and additionally require the admin role, or 403.
pub async fn require_admin(
    req: &HttpRequest,
    sessions: &SessionManager,
) -> Result<User, ServiceError> {
    let user = authenticate_request(req, sessions).await?;
    if !user.role.is_admin() {
        return Err(ServiceError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    Ok(user)
}

/// Resolve the viewer if a valid session is presented; anonymous is fine.
pub async fn optional_user(
    req: &HttpRequest,
    sessions: &SessionManager,
) -> Result<Option<User>, ServiceError> {
    match extract_token_from_header(req) {
        Some(token) => sessions.resolve(&token).await,
        None => Ok(None),
    }
}
