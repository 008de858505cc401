use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminCapability;
use crate::features::blood_requests::dtos::{
    BloodRequestResponseDto, CreateBloodRequestDto, UpdateRequestStatusDto,
};
use crate::features::blood_requests::models::RequestStatus;
use crate::features::blood_requests::repository::BloodRequestRepository;
use crate::features::blood_requests::triage::triage;

/// Service for blood request intake, triage and status changes
pub struct BloodRequestService {
    repo: Arc<dyn BloodRequestRepository>,
}

impl BloodRequestService {
    pub fn new(repo: Arc<dyn BloodRequestRepository>) -> Self {
        Self { repo }
    }

    /// Submit a blood request (public). Payload must already be validated.
    pub async fn submit(&self, dto: CreateBloodRequestDto) -> Result<BloodRequestResponseDto> {
        let request = self.repo.insert(dto.into()).await?;

        tracing::info!(
            "Blood request submitted: id={}, blood_group={}, urgency={}",
            request.id,
            request.blood_group,
            request.urgency_level
        );

        Ok(request.into())
    }

    /// Requests in triage order, optionally restricted to one status (admin)
    pub async fn triage_list(
        &self,
        cap: &AdminCapability,
        status: Option<RequestStatus>,
    ) -> Result<Vec<BloodRequestResponseDto>> {
        let requests = triage(self.repo.list(status).await?);
        tracing::debug!(
            "Admin {} listed {} blood requests (status={:?})",
            cap.admin(),
            requests.len(),
            status
        );

        Ok(requests.into_iter().map(Into::into).collect())
    }

    /// Apply a status transition (admin).
    ///
    /// Same-state requests return the stored record without writing. The write
    /// itself is conditioned on the version read here, so two administrators
    /// racing on one request cannot both succeed.
    pub async fn transition(
        &self,
        cap: &AdminCapability,
        id: Uuid,
        dto: UpdateRequestStatusDto,
    ) -> Result<BloodRequestResponseDto> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blood request with id {} not found", id)))?;

        if let Some(expected) = dto.expected_version {
            if expected != current.version {
                return Err(AppError::Conflict(format!(
                    "Blood request {} is at version {}, not {}",
                    id, current.version, expected
                )));
            }
        }

        let target = dto.status;
        if current.status == target {
            return Ok(current.into());
        }

        if !current.status.can_transition_to(target) {
            let reason = if current.status.is_terminal() {
                format!("{} is final", current.status)
            } else {
                format!("{} may not follow {}", target, current.status)
            };
            return Err(AppError::InvalidTransition(format!(
                "Cannot change status from {} to {}: {}",
                current.status, target, reason
            )));
        }

        let updated = self
            .repo
            .update_status(id, current.version, target)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Stale status update on blood request {}", id);
                AppError::Conflict(format!(
                    "Blood request {} was modified concurrently; reload and retry",
                    id
                ))
            })?;

        tracing::info!(
            "Blood request status changed: id={}, {} -> {}, version={}, by={}",
            id,
            current.status,
            updated.status,
            updated.version,
            cap.admin()
        );

        Ok(updated.into())
    }
}
