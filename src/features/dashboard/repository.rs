use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::core::database::log_db_error;
use crate::core::error::Result;
use crate::features::blood_groups::BloodGroup;
use crate::features::blood_requests::models::{BloodRequest, RequestStatus};
use crate::features::donors::models::{Donor, DonorFilter};

/// Every figure on the admin dashboard, read from one view of the store
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub total_donors: i64,
    pub available_donors: i64,
    pub total_requests: i64,
    pub pending_requests: i64,
    pub total_messages: i64,
    pub unread_messages: i64,
    /// One entry per blood group in id order, zero counts included
    pub blood_group_distribution: Vec<(BloodGroup, i64)>,
    /// Newest first
    pub recent_donors: Vec<Donor>,
    /// Newest first
    pub recent_requests: Vec<BloodRequest>,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn snapshot(&self, recent_limit: i64) -> Result<DashboardSnapshot>;
}

/// Postgres-backed dashboard reads
pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Counts donors with the same predicate rendering the directory search uses,
/// so an empty filter agrees with an unfiltered search.
async fn count_donors(conn: &mut PgConnection, filter: &DonorFilter) -> Result<i64> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM donors");
    filter.push_where(&mut qb);

    qb.build_query_scalar::<i64>()
        .fetch_one(&mut *conn)
        .await
        .map_err(log_db_error("Failed to count donors"))
}

#[async_trait]
impl DashboardRepository for PgDashboardRepository {
    async fn snapshot(&self, recent_limit: i64) -> Result<DashboardSnapshot> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(log_db_error("Failed to begin dashboard transaction"))?;

        // Must precede the first read; every statement below then shares one snapshot.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(log_db_error("Failed to set dashboard isolation level"))?;

        let total_donors = count_donors(&mut *tx, &DonorFilter::new()).await?;
        let available_donors = count_donors(&mut *tx, &DonorFilter::new().available(true)).await?;

        let requests = sqlx::query!(
            r#"
            SELECT
                COUNT(*) as "total!",
                COUNT(*) FILTER (WHERE status = $1) as "pending!"
            FROM blood_requests
            "#,
            RequestStatus::Pending as RequestStatus
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(log_db_error("Failed to count blood requests"))?;

        let inbox = sqlx::query!(
            r#"
            SELECT
                COUNT(*) as "total!",
                COUNT(*) FILTER (WHERE NOT is_read) as "unread!"
            FROM contact_messages
            "#
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(log_db_error("Failed to count contact messages"))?;

        let blood_group_distribution = sqlx::query!(
            r#"
            SELECT bg.id as "blood_group: BloodGroup", COUNT(d.id) as "donor_count!"
            FROM blood_groups bg
            LEFT JOIN donors d ON d.blood_group_id = bg.id
            GROUP BY bg.id
            ORDER BY bg.id
            "#
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(log_db_error("Failed to count donors by blood group"))?
        .into_iter()
        .map(|row| (row.blood_group, row.donor_count))
        .collect();

        let recent_donors = sqlx::query_as!(
            Donor,
            r#"
            SELECT id, fullname, mobileno, emailid, age, gender,
                   blood_group_id as "blood_group: BloodGroup",
                   address, is_available, last_donation_date, created_at, updated_at
            FROM donors
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
            recent_limit
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(log_db_error("Failed to list recent donors"))?;

        let recent_requests = sqlx::query_as!(
            BloodRequest,
            r#"
            SELECT id, patient_name, blood_group, units_required, hospital_name,
                   hospital_address, contact_person, phone_number, urgency_level,
                   additional_info, status as "status: RequestStatus",
                   version, created_at, updated_at
            FROM blood_requests
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
            recent_limit
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(log_db_error("Failed to list recent blood requests"))?;

        tx.commit()
            .await
            .map_err(log_db_error("Failed to commit dashboard transaction"))?;

        Ok(DashboardSnapshot {
            total_donors,
            available_donors,
            total_requests: requests.total,
            pending_requests: requests.pending,
            total_messages: inbox.total,
            unread_messages: inbox.unread,
            blood_group_distribution,
            recent_donors,
            recent_requests,
        })
    }
}
