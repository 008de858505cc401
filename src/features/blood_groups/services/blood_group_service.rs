use crate::features::blood_groups::dtos::BloodGroupResponseDto;
use crate::features::blood_groups::models::BloodGroup;

/// Serves the fixed blood group enumeration.
///
/// The `blood_groups` table is seeded from the same ids by migration and never
/// changes afterwards, so the enum is the source of truth for reads.
#[derive(Debug, Default)]
pub struct BloodGroupService;

impl BloodGroupService {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> Vec<BloodGroupResponseDto> {
        BloodGroup::ALL.into_iter().map(Into::into).collect()
    }
}
