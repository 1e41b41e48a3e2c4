use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Result};
use futures_util::StreamExt;
use utoipa;

use crate::auth::SessionManager;
use crate::middleware::auth::require_admin;
use crate::models::{ServiceError, UploadResponse};
use crate::services::upload_service::MAX_UPLOAD_BYTES;
use crate::services::UploadService;

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored; public URL returned", body = UploadResponse),
        (status = 400, description = "Missing file, wrong type or too large", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    upload_service: web::Data<UploadService>,
    mut payload: Multipart,
    req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, ServiceError> {
    let user = require_admin(&req, &sessions).await?;

    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| ServiceError::validation(format!("Invalid multipart data: {}", e)))?;

        if field.name().unwrap_or("") != "file" {
            continue;
        }

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();
        let mimetype = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| ServiceError::validation(format!("Failed to read upload: {}", e)))?;
            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(ServiceError::validation("File exceeds the 10MB limit"));
            }
            data.extend_from_slice(&chunk);
        }

        let file = upload_service
            .save(&original_name, &mimetype, data, &user.id)
            .await?;

        return Ok(HttpResponse::Ok().json(UploadResponse { url: file.url }));
    }

    Err(ServiceError::validation("No file provided"))
}
