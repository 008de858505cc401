use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact::models::{ContactMessage, NewContactMessage};
use crate::shared::validation::{blank_as_none, not_blank, PHONE_REGEX};

/// Request DTO for the public contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactMessageDto {
    #[validate(
        length(max = 255, message = "Name must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(
        length(max = 255, message = "Subject must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub subject: String,

    #[validate(
        length(max = 5000, message = "Message must not exceed 5000 characters"),
        custom(function = "not_blank")
    )]
    pub message: String,
}

impl From<CreateContactMessageDto> for NewContactMessage {
    fn from(dto: CreateContactMessageDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            subject: dto.subject.trim().to_string(),
            message: dto.message.trim().to_string(),
        }
    }
}

/// Response DTO for contact message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponseDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.message,
            is_read: m.is_read,
            created_at: m.created_at,
        }
    }
}
