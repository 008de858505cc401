use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::{ApiResponse, Meta};

/// Send a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message received", body = ApiResponse<ContactMessageResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn submit_contact_message(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactMessageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(message),
            Some("Thank you! Your message has been received.".to_string()),
            None,
        )),
    ))
}

/// List contact messages, newest first (admin)
#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    responses(
        (status = 200, description = "Inbox", body = ApiResponse<Vec<ContactMessageResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-contact",
    security(("bearer_auth" = []))
)]
pub async fn list_contact_messages(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactMessageResponseDto>>>> {
    let messages = service.list(&cap).await?;
    let meta = Meta::of(&messages);
    Ok(Json(ApiResponse::success(Some(messages), None, Some(meta))))
}

/// Mark a contact message as read (admin)
#[utoipa::path(
    put,
    path = "/api/admin/contact-messages/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Contact message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = ApiResponse<ContactMessageResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Message not found")
    ),
    tag = "admin-contact",
    security(("bearer_auth" = []))
)]
pub async fn mark_contact_message_read(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ContactMessageResponseDto>>> {
    let message = service.mark_read(&cap, id).await?;
    Ok(Json(ApiResponse::success(Some(message), None, None)))
}

/// Delete a contact message (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/contact-messages/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact message ID")
    ),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Message not found")
    ),
    tag = "admin-contact",
    security(("bearer_auth" = []))
)]
pub async fn delete_contact_message(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&cap, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Message deleted successfully".to_string()),
        None,
    )))
}
