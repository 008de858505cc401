use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::log_db_error;
use crate::core::error::Result;
use crate::features::blood_requests::models::{BloodRequest, NewBloodRequest, RequestStatus};

/// Blood request persistence. Requests are never deleted.
#[async_trait]
pub trait BloodRequestRepository: Send + Sync {
    /// Persists with status `pending` and version 1
    async fn insert(&self, request: NewBloodRequest) -> Result<BloodRequest>;

    /// Unordered; callers apply triage ordering
    async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<BloodRequest>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BloodRequest>>;

    /// Writes `status` only if the stored version still equals
    /// `expected_version`, bumping the version. `None` means the precondition
    /// failed (or the row is gone).
    async fn update_status(
        &self,
        id: Uuid,
        expected_version: i32,
        status: RequestStatus,
    ) -> Result<Option<BloodRequest>>;
}

/// Postgres-backed blood request repository
pub struct PgBloodRequestRepository {
    pool: PgPool,
}

impl PgBloodRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BloodRequestRepository for PgBloodRequestRepository {
    async fn insert(&self, request: NewBloodRequest) -> Result<BloodRequest> {
        sqlx::query_as!(
            BloodRequest,
            r#"
            INSERT INTO blood_requests
                (id, patient_name, blood_group, units_required, hospital_name, hospital_address,
                 contact_person, phone_number, urgency_level, additional_info, status, version)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 1)
            RETURNING id, patient_name, blood_group, units_required, hospital_name,
                      hospital_address, contact_person, phone_number, urgency_level,
                      additional_info, status as "status: RequestStatus",
                      version, created_at, updated_at
            "#,
            Uuid::now_v7(),
            request.patient_name,
            request.blood_group.code(),
            request.units_required,
            request.hospital_name,
            request.hospital_address,
            request.contact_person,
            request.phone_number,
            request.urgency_level.as_str(),
            request.additional_info,
            RequestStatus::Pending as RequestStatus
        )
        .fetch_one(&self.pool)
        .await
        .map_err(log_db_error("Failed to insert blood request"))
    }

    async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<BloodRequest>> {
        sqlx::query_as!(
            BloodRequest,
            r#"
            SELECT id, patient_name, blood_group, units_required, hospital_name,
                   hospital_address, contact_person, phone_number, urgency_level,
                   additional_info, status as "status: RequestStatus",
                   version, created_at, updated_at
            FROM blood_requests
            WHERE ($1::request_status IS NULL OR status = $1)
            "#,
            status as Option<RequestStatus>
        )
        .fetch_all(&self.pool)
        .await
        .map_err(log_db_error("Failed to list blood requests"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BloodRequest>> {
        sqlx::query_as!(
            BloodRequest,
            r#"
            SELECT id, patient_name, blood_group, units_required, hospital_name,
                   hospital_address, contact_person, phone_number, urgency_level,
                   additional_info, status as "status: RequestStatus",
                   version, created_at, updated_at
            FROM blood_requests
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(log_db_error("Failed to get blood request"))
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected_version: i32,
        status: RequestStatus,
    ) -> Result<Option<BloodRequest>> {
        sqlx::query_as!(
            BloodRequest,
            r#"
            UPDATE blood_requests
            SET status = $3, version = version + 1, updated_at = NOW()
            WHERE id = $1 AND version = $2
            RETURNING id, patient_name, blood_group, units_required, hospital_name,
                      hospital_address, contact_person, phone_number, urgency_level,
                      additional_info, status as "status: RequestStatus",
                      version, created_at, updated_at
            "#,
            id,
            expected_version,
            status as RequestStatus
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(log_db_error("Failed to update blood request status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::blood_groups::BloodGroup;
    use crate::features::blood_requests::models::UrgencyLevel;

    fn new_request(urgency: UrgencyLevel) -> NewBloodRequest {
        NewBloodRequest {
            patient_name: "Jane Roe".to_string(),
            blood_group: BloodGroup::AbNegative,
            units_required: 2,
            hospital_name: "City General".to_string(),
            hospital_address: "1 Main St".to_string(),
            contact_person: "John Roe".to_string(),
            phone_number: "5559876543".to_string(),
            urgency_level: urgency,
            additional_info: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_insert_starts_pending_at_version_one(pool: PgPool) {
        let repo = PgBloodRequestRepository::new(pool);
        let request = repo.insert(new_request(UrgencyLevel::Urgent)).await.unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.version, 1);
        assert_eq!(request.urgency_level, "urgent");

        let found = repo.find_by_id(request.id).await.unwrap().unwrap();
        assert_eq!(found.id, request.id);
        assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_stale_version_does_not_write(pool: PgPool) {
        let repo = PgBloodRequestRepository::new(pool);
        let request = repo.insert(new_request(UrgencyLevel::Normal)).await.unwrap();

        let updated = repo
            .update_status(request.id, 1, RequestStatus::InProgress)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, RequestStatus::InProgress);
        assert_eq!(updated.version, 2);

        // A writer still holding version 1 loses
        let stale = repo
            .update_status(request.id, 1, RequestStatus::Cancelled)
            .await
            .unwrap();
        assert!(stale.is_none());

        let stored = repo.find_by_id(request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::InProgress);
        assert_eq!(stored.version, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_filters_by_status(pool: PgPool) {
        let repo = PgBloodRequestRepository::new(pool);
        let first = repo.insert(new_request(UrgencyLevel::Immediate)).await.unwrap();
        repo.insert(new_request(UrgencyLevel::Normal)).await.unwrap();
        repo.update_status(first.id, 1, RequestStatus::InProgress)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
        assert_eq!(
            repo.list(Some(RequestStatus::Pending)).await.unwrap().len(),
            1
        );
        let in_progress = repo.list(Some(RequestStatus::InProgress)).await.unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, first.id);
        assert!(repo
            .list(Some(RequestStatus::Fulfilled))
            .await
            .unwrap()
            .is_empty());
    }
}
