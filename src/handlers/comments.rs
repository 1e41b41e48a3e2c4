use actix_web::{web, HttpResponse, Result};
use std::str::FromStr;
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::{authenticate_request, require_admin};
use crate::models::social::ItemType;
use crate::models::{ApiResponse, CommentForm, ServiceError};
use crate::services::SocialService;

const RECENT_COMMENT_LIMIT: i64 = 20;

fn parse_item_type(raw: &str) -> Result<ItemType, ServiceError> {
    ItemType::from_str(raw).map_err(ServiceError::validation)
}

#[utoipa::path(
    get,
    path = "/api/comments/{item_type}/{item_id}",
    params(
        ("item_type" = String, Path, description = "project | experience | achievement"),
        ("item_id" = String, Path, description = "ID of the commented item")
    ),
    responses(
        (status = 200, description = "Top-level comments with one level of replies", body = Vec<CommentWithUser>),
        (status = 400, description = "Unknown item type", body = ErrorResponse)
    ),
    security()
)]
pub async fn list_comments(
    social_service: web::Data<SocialService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (raw_type, item_id) = path.into_inner();
    let item_type = parse_item_type(&raw_type)?;

    let comments = social_service.list_comments(item_type, &item_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CommentForm,
    responses(
        (status = 200, description = "Comment created", body = Comment),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_comment(
    social_service: web::Data<SocialService>,
    form: web::Json<CommentForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    // Any authenticated user may comment, not just the admin
    let user = authenticate_request(&req, &sessions).await?;

    let comment = social_service
        .create_comment(&user.id, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = String, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = ApiResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    )
)]
pub async fn delete_comment(
    social_service: web::Data<SocialService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    social_service.delete_comment(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Comment deleted successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/comments",
    responses(
        (status = 200, description = "Most recent comments across all items", body = Vec<CommentWithUser>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn list_recent_comments(
    social_service: web::Data<SocialService>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let comments = social_service.recent_comments(RECENT_COMMENT_LIMIT).await?;

    Ok(HttpResponse::Ok().json(comments))
}
