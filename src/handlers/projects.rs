use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::require_admin;
use crate::models::{ApiResponse, ProjectForm, ProjectPatch, ServiceError};
use crate::services::ProjectService;

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Published projects, newest first", body = Vec<Project>)
    ),
    security()
)]
pub async fn list_projects(
    project_service: web::Data<ProjectService>,
) -> Result<HttpResponse, ServiceError> {
    let projects = project_service.list(true).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    responses(
        (status = 200, description = "Published and featured projects", body = Vec<Project>)
    ),
    security()
)]
pub async fn list_featured_projects(
    project_service: web::Data<ProjectService>,
) -> Result<HttpResponse, ServiceError> {
    let projects = project_service.list_featured().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_project(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let project = project_service.get(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    responses(
        (status = 200, description = "All projects including drafts", body = Vec<Project>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn list_all_projects(
    project_service: web::Data<ProjectService>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let projects = project_service.list(false).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project created", body = Project),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn create_project(
    project_service: web::Data<ProjectService>,
    form: web::Json<ProjectForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let project = project_service.create(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    request_body = ProjectPatch,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
pub async fn update_project(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    form: web::Json<ProjectPatch>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let project = project_service
        .update(&path.into_inner(), form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = ApiResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
pub async fn delete_project(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    project_service.delete(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Project deleted successfully".to_string(),
    }))
}
