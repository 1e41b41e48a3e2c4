use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::{extract_token_from_header, SessionManager, SESSION_TTL_SECONDS};
use crate::middleware::auth::authenticate_request;
use crate::models::{ApiResponse, AuthResponse, LoginForm, PublicUser, RegisterForm, ServiceError};
use crate::services::AuthService;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful - session token returned in response body", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    security()
)]
pub async fn login_api(
    auth_service: web::Data<AuthService>,
    sessions: web::Data<SessionManager>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = auth_service.login(&form.email, &form.password).await?;
    let token = sessions.create_session(&user.id).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        expires_in: SESSION_TTL_SECONDS,
        user: user.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logout successful - session destroyed", body = ApiResponse),
        (status = 401, description = "No session presented", body = ErrorResponse)
    )
)]
pub async fn logout_api(
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    let token = extract_token_from_header(&req).ok_or_else(|| {
        ServiceError::AuthenticationError("Missing Authorization header".to_string())
    })?;

    sessions.destroy(&token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Logout successful".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterForm,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    security()
)]
pub async fn register_api(
    auth_service: web::Data<AuthService>,
    sessions: web::Data<SessionManager>,
    form: web::Json<RegisterForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = auth_service.register(form.into_inner()).await?;
    let token = sessions.create_session(&user.id).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        token,
        expires_in: SESSION_TTL_SECONDS,
        user: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "The authenticated user", body = PublicUser),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn current_user_api(
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    let user = authenticate_request(&req, &sessions).await?;

    Ok(HttpResponse::Ok().json(PublicUser::from(user)))
}
