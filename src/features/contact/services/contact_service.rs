use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminCapability;
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::repository::ContactRepository;

/// Service for contact form messages
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Store a contact form submission (public). Payload must already be validated.
    pub async fn submit(&self, dto: CreateContactMessageDto) -> Result<ContactMessageResponseDto> {
        let message = self.repo.insert(dto.into()).await?;
        tracing::info!("Contact message received: id={}", message.id);

        Ok(message.into())
    }

    pub async fn list(&self, cap: &AdminCapability) -> Result<Vec<ContactMessageResponseDto>> {
        let messages = self.repo.list().await?;
        tracing::debug!("Admin {} listed {} contact messages", cap.admin(), messages.len());

        Ok(messages.into_iter().map(Into::into).collect())
    }

    pub async fn mark_read(
        &self,
        cap: &AdminCapability,
        id: Uuid,
    ) -> Result<ContactMessageResponseDto> {
        let message = self
            .repo
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact message with id {} not found", id)))?;

        tracing::info!("Contact message marked as read: id={}, by={}", id, cap.admin());
        Ok(message.into())
    }

    pub async fn delete(&self, cap: &AdminCapability, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Contact message with id {} not found",
                id
            )));
        }

        tracing::info!("Contact message deleted: id={}, by={}", id, cap.admin());
        Ok(())
    }
}
