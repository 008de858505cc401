use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::blood_groups::models::BloodGroup;

/// Reference row as exposed by `GET /api/blood-groups`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodGroupResponseDto {
    pub id: i32,
    pub blood_group: String,
}

impl From<BloodGroup> for BloodGroupResponseDto {
    fn from(group: BloodGroup) -> Self {
        Self {
            id: group.id(),
            blood_group: group.code().to_string(),
        }
    }
}
