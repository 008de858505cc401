use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::blood_groups::BloodGroup;

/// Donor gender as collected by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Database model for donor
#[derive(Debug, Clone, FromRow)]
pub struct Donor {
    pub id: Uuid,
    pub fullname: String,
    pub mobileno: String,
    pub emailid: Option<String>,
    pub age: i32,
    pub gender: String,
    #[sqlx(rename = "blood_group_id")]
    pub blood_group: BloodGroup,
    pub address: String,
    pub is_available: bool,
    pub last_donation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Donor {
    /// Unavailable donors stay discoverable but must not be offered as contacts.
    pub fn is_contactable(&self) -> bool {
        self.is_available
    }
}

/// Data for registering a new donor (already validated)
#[derive(Debug, Clone)]
pub struct NewDonor {
    pub fullname: String,
    pub mobileno: String,
    pub emailid: Option<String>,
    pub age: i32,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub address: String,
}
