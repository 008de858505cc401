use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::model::AdminCapability;
use crate::features::dashboard::dtos::{BloodGroupCountDto, DashboardStatsDto};
use crate::features::dashboard::DashboardRepository;
use crate::shared::constants::RECENT_ACTIVITY_LIMIT;

/// Service for admin dashboard queries. Stateless; every call reads the store.
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Aggregate counts and recent activity
    pub async fn get_stats(&self, cap: &AdminCapability) -> Result<DashboardStatsDto> {
        let snapshot = self.repository.snapshot(RECENT_ACTIVITY_LIMIT).await?;

        tracing::debug!("Dashboard stats computed for {}", cap.admin());

        Ok(DashboardStatsDto {
            total_donors: snapshot.total_donors,
            available_donors: snapshot.available_donors,
            total_requests: snapshot.total_requests,
            pending_requests: snapshot.pending_requests,
            total_messages: snapshot.total_messages,
            unread_messages: snapshot.unread_messages,
            blood_group_distribution: snapshot
                .blood_group_distribution
                .into_iter()
                .map(|(blood_group, donor_count)| BloodGroupCountDto {
                    blood_group,
                    donor_count,
                })
                .collect(),
            recent_donors: snapshot.recent_donors.into_iter().map(Into::into).collect(),
            recent_requests: snapshot.recent_requests.into_iter().map(Into::into).collect(),
        })
    }
}
