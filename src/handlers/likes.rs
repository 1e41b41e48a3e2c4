use actix_web::{web, HttpResponse, Result};
use std::str::FromStr;
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::{authenticate_request, optional_user};
use crate::models::social::ItemType;
use crate::models::{LikeForm, ServiceError};
use crate::services::SocialService;

#[utoipa::path(
    post,
    path = "/api/likes",
    request_body = LikeForm,
    responses(
        (status = 200, description = "Like toggled; new state and count returned", body = LikeToggleResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn toggle_like(
    social_service: web::Data<SocialService>,
    form: web::Json<LikeForm>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    let user = authenticate_request(&req, &sessions).await?;

    let result = social_service
        .toggle_like(&user.id, form.item_type, &form.item_id)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/likes/{item_type}/{item_id}",
    params(
        ("item_type" = String, Path, description = "project | experience | achievement"),
        ("item_id" = String, Path, description = "ID of the liked item")
    ),
    responses(
        (status = 200, description = "Like count, plus whether the viewer liked it", body = LikeStatusResponse),
        (status = 400, description = "Unknown item type", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_like_status(
    social_service: web::Data<SocialService>,
    path: web::Path<(String, String)>,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    let (raw_type, item_id) = path.into_inner();
    let item_type = ItemType::from_str(&raw_type).map_err(ServiceError::validation)?;

    // The count is public; the viewer flag only applies with a valid session
    let viewer = optional_user(&req, &sessions).await?;
    let status = social_service
        .like_status(item_type, &item_id, viewer.as_ref().map(|u| u.id.as_str()))
        .await?;

    Ok(HttpResponse::Ok().json(status))
}
