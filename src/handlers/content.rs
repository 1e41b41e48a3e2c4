use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::require_admin;
use crate::models::{ApiResponse, ContentForm, ContentImageForm, ServiceError};
use crate::services::ContentService;

#[utoipa::path(
    get,
    path = "/api/content",
    responses(
        (status = 200, description = "All content overrides grouped by section")
    ),
    security()
)]
pub async fn get_content(
    content_service: web::Data<ContentService>,
) -> Result<HttpResponse, ServiceError> {
    let sections = content_service.get_all().await?;

    Ok(HttpResponse::Ok().json(sections))
}

#[utoipa::path(
    post,
    path = "/api/content",
    request_body = ContentForm,
    responses(
        (status = 200, description = "Content override saved", body = ApiResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn update_content(
    content_service: web::Data<ContentService>,
    form: web::Json<ContentForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let form = form.into_inner();
    content_service
        .set(&form.section, &form.field, form.content)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Content updated successfully".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/content/image",
    request_body = ContentImageForm,
    responses(
        (status = 200, description = "Image reference saved", body = ApiResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn update_content_image(
    content_service: web::Data<ContentService>,
    form: web::Json<ContentImageForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    // Image overrides are stored as plain content entries holding the URL
    let form = form.into_inner();
    content_service
        .set(&form.section, &form.field, form.image_url)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Image updated successfully".to_string(),
    }))
}
