use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::blood_groups::BloodGroup;
use crate::features::blood_requests::dtos::BloodRequestResponseDto;
use crate::features::donors::dtos::DonorResponseDto;

/// Donor count for one blood group
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodGroupCountDto {
    #[schema(value_type = String, example = "O+")]
    pub blood_group: BloodGroup,
    pub donor_count: i64,
}

/// Admin dashboard snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_donors: i64,
    pub available_donors: i64,
    pub total_requests: i64,
    pub pending_requests: i64,
    pub total_messages: i64,
    pub unread_messages: i64,
    /// Every blood group in id order, zero counts included
    pub blood_group_distribution: Vec<BloodGroupCountDto>,
    pub recent_donors: Vec<DonorResponseDto>,
    pub recent_requests: Vec<BloodRequestResponseDto>,
}
