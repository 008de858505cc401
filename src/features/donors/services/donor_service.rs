use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminCapability;
use crate::features::blood_groups::BloodGroup;
use crate::features::donors::dtos::{
    CreateDonorDto, DonorResponseDto, DonorSearchQuery, DonorSearchResultDto,
    UpdateDonorAvailabilityDto,
};
use crate::features::donors::models::DonorFilter;
use crate::features::donors::repository::DonorRepository;

/// Service for the donor directory
pub struct DonorService {
    repo: Arc<dyn DonorRepository>,
}

impl DonorService {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    /// Register a new donor (public). Payload must already be validated.
    pub async fn register(&self, dto: CreateDonorDto) -> Result<DonorResponseDto> {
        let donor = self.repo.insert(dto.into()).await?;

        tracing::info!(
            "Donor registered: id={}, blood_group={}",
            donor.id,
            donor.blood_group
        );

        Ok(donor.into())
    }

    /// Compatibility search (public). Exact blood group match only.
    pub async fn search(&self, query: DonorSearchQuery) -> Result<Vec<DonorSearchResultDto>> {
        let filter = Self::build_filter(&query)?;
        let donors = self.repo.search(&filter).await?;

        Ok(donors.into_iter().map(Into::into).collect())
    }

    /// Every donor with full contact details (admin)
    pub async fn list_all(&self, cap: &AdminCapability) -> Result<Vec<DonorResponseDto>> {
        let donors = self.repo.search(&DonorFilter::new()).await?;
        tracing::debug!("Admin {} listed {} donors", cap.admin(), donors.len());

        Ok(donors.into_iter().map(Into::into).collect())
    }

    /// Set or flip donor availability (admin)
    pub async fn set_availability(
        &self,
        cap: &AdminCapability,
        id: Uuid,
        dto: UpdateDonorAvailabilityDto,
    ) -> Result<DonorResponseDto> {
        let donor = self
            .repo
            .update_availability(id, dto.is_available)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor with id {} not found", id)))?;

        tracing::info!(
            "Donor availability updated: id={}, is_available={}, by={}",
            donor.id,
            donor.is_available,
            cap.admin()
        );

        Ok(donor.into())
    }

    /// Remove a donor (admin)
    pub async fn delete(&self, cap: &AdminCapability, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Donor with id {} not found", id)));
        }

        tracing::info!("Donor deleted: id={}, by={}", id, cap.admin());
        Ok(())
    }

    fn build_filter(query: &DonorSearchQuery) -> Result<DonorFilter> {
        // Only the fully blank value is a wildcard; "O " is a query-decoded "O+".
        let blood_group = match query.blood_group.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.parse::<BloodGroup>()
                    .map_err(AppError::Validation)?,
            ),
            _ => None,
        };

        Ok(DonorFilter::new()
            .blood_group(blood_group)
            .location(query.location.as_deref()))
    }
}
