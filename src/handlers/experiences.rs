use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::require_admin;
use crate::models::{ApiResponse, ExperienceForm, ExperiencePatch, ServiceError};
use crate::services::ExperienceService;

#[utoipa::path(
    get,
    path = "/api/experiences",
    responses(
        (status = 200, description = "Published experiences, most recent start date first", body = Vec<Experience>)
    ),
    security()
)]
pub async fn list_experiences(
    experience_service: web::Data<ExperienceService>,
) -> Result<HttpResponse, ServiceError> {
    let experiences = experience_service.list(true).await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[utoipa::path(
    get,
    path = "/api/admin/experiences",
    responses(
        (status = 200, description = "All experiences including drafts", body = Vec<Experience>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn list_all_experiences(
    experience_service: web::Data<ExperienceService>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let experiences = experience_service.list(false).await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[utoipa::path(
    post,
    path = "/api/experiences",
    request_body = ExperienceForm,
    responses(
        (status = 200, description = "Experience created", body = Experience),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn create_experience(
    experience_service: web::Data<ExperienceService>,
    form: web::Json<ExperienceForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let experience = experience_service.create(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(experience))
}

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    params(("id" = String, Path, description = "Experience ID")),
    request_body = ExperiencePatch,
    responses(
        (status = 200, description = "Experience updated", body = Experience),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
pub async fn update_experience(
    experience_service: web::Data<ExperienceService>,
    path: web::Path<String>,
    form: web::Json<ExperiencePatch>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let experience = experience_service
        .update(&path.into_inner(), form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(experience))
}

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    params(("id" = String, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "Experience deleted", body = ApiResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
pub async fn delete_experience(
    experience_service: web::Data<ExperienceService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    experience_service.delete(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Experience deleted successfully".to_string(),
    }))
}
