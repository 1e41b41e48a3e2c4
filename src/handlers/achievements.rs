use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::require_admin;
use crate::models::{AchievementForm, AchievementPatch, ApiResponse, ServiceError};
use crate::services::AchievementService;

#[utoipa::path(
    get,
    path = "/api/achievements",
    responses(
        (status = 200, description = "Published achievements, newest date first", body = Vec<Achievement>)
    ),
    security()
)]
pub async fn list_achievements(
    achievement_service: web::Data<AchievementService>,
) -> Result<HttpResponse, ServiceError> {
    let achievements = achievement_service.list(true).await?;

    Ok(HttpResponse::Ok().json(achievements))
}

#[utoipa::path(
    get,
    path = "/api/admin/achievements",
    responses(
        (status = 200, description = "All achievements including drafts", body = Vec<Achievement>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn list_all_achievements(
    achievement_service: web::Data<AchievementService>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let achievements = achievement_service.list(false).await?;

    Ok(HttpResponse::Ok().json(achievements))
}

#[utoipa::path(
    post,
    path = "/api/achievements",
    request_body = AchievementForm,
    responses(
        (status = 200, description = "Achievement created", body = Achievement),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn create_achievement(
    achievement_service: web::Data<AchievementService>,
    form: web::Json<AchievementForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let achievement = achievement_service.create(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(achievement))
}

#[utoipa::path(
    put,
    path = "/api/achievements/{id}",
    params(("id" = String, Path, description = "Achievement ID")),
    request_body = AchievementPatch,
    responses(
        (status = 200, description = "Achievement updated", body = Achievement),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Achievement not found", body = ErrorResponse)
    )
)]
pub async fn update_achievement(
    achievement_service: web::Data<AchievementService>,
    path: web::Path<String>,
    form: web::Json<AchievementPatch>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let achievement = achievement_service
        .update(&path.into_inner(), form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(achievement))
}

#[utoipa::path(
    delete,
    path = "/api/achievements/{id}",
    params(("id" = String, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Achievement deleted", body = ApiResponse),
        (status = 404, description = "Achievement not found", body = ErrorResponse)
    )
)]
pub async fn delete_achievement(
    achievement_service: web::Data<AchievementService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    achievement_service.delete(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Achievement deleted successfully".to_string(),
    }))
}
