use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::database::log_db_error;
use crate::core::error::Result;
use crate::features::blood_groups::BloodGroup;
use crate::features::donors::models::{Donor, DonorFilter, NewDonor};

/// Donor persistence
#[async_trait]
pub trait DonorRepository: Send + Sync {
    async fn insert(&self, donor: NewDonor) -> Result<Donor>;

    /// Donors matching the filter, newest first
    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>>;

    /// Sets `is_available` when `available` is given, flips it otherwise.
    /// Returns `None` when the donor does not exist.
    async fn update_availability(&self, id: Uuid, available: Option<bool>)
        -> Result<Option<Donor>>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Column list for filtered queries built at runtime
const DONOR_COLUMNS: &str = "id, fullname, mobileno, emailid, age, gender, blood_group_id, \
     address, is_available, last_donation_date, created_at, updated_at";

/// Postgres-backed donor repository
pub struct PgDonorRepository {
    pool: PgPool,
}

impl PgDonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorRepository for PgDonorRepository {
    async fn insert(&self, donor: NewDonor) -> Result<Donor> {
        sqlx::query_as!(
            Donor,
            r#"
            INSERT INTO donors (id, fullname, mobileno, emailid, age, gender, blood_group_id, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, fullname, mobileno, emailid, age, gender,
                      blood_group_id as "blood_group: BloodGroup",
                      address, is_available, last_donation_date, created_at, updated_at
            "#,
            Uuid::now_v7(),
            donor.fullname,
            donor.mobileno,
            donor.emailid,
            donor.age,
            donor.gender.as_str(),
            donor.blood_group as BloodGroup,
            donor.address
        )
        .fetch_one(&self.pool)
        .await
        .map_err(log_db_error("Failed to insert donor"))
    }

    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM donors", DONOR_COLUMNS));
        filter.push_where(&mut qb);
        qb.push(" ORDER BY created_at DESC, id DESC");

        qb.build_query_as::<Donor>()
            .fetch_all(&self.pool)
            .await
            .map_err(log_db_error("Failed to search donors"))
    }

    async fn update_availability(
        &self,
        id: Uuid,
        available: Option<bool>,
    ) -> Result<Option<Donor>> {
        // Single statement so a flip never races with a concurrent read-modify-write.
        sqlx::query_as!(
            Donor,
            r#"
            UPDATE donors
            SET is_available = COALESCE($2, NOT is_available), updated_at = NOW()
            WHERE id = $1
            RETURNING id, fullname, mobileno, emailid, age, gender,
                      blood_group_id as "blood_group: BloodGroup",
                      address, is_available, last_donation_date, created_at, updated_at
            "#,
            id,
            available
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(log_db_error("Failed to update donor availability"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query!("DELETE FROM donors WHERE id = $1", id)
            .execute(&self.pool)
            .await
            .map_err(log_db_error("Failed to delete donor"))?;

        Ok(result.rows_affected() > 0)
    }
}
