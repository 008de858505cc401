use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::blood_groups::BloodGroup;
use crate::features::donors::models::{Donor, Gender, NewDonor};
use crate::shared::validation::{blank_as_none, not_blank, MOBILE_REGEX};

/// Request DTO for donor self-registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorDto {
    #[validate(
        length(max = 255, message = "Full name must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub fullname: String,

    /// Ten digit mobile number
    #[validate(regex(path = *MOBILE_REGEX, message = "Mobile number must be exactly 10 digits"))]
    pub mobileno: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub emailid: Option<String>,

    #[validate(range(min = 18, max = 65, message = "Donor age must be between 18 and 65"))]
    pub age: i32,

    pub gender: Gender,

    /// Code ("O+") or reference id (7)
    #[schema(value_type = String, example = "O+")]
    pub blood_group: BloodGroup,

    #[validate(custom(function = "not_blank"))]
    pub address: String,
}

impl From<CreateDonorDto> for NewDonor {
    fn from(dto: CreateDonorDto) -> Self {
        Self {
            fullname: dto.fullname.trim().to_string(),
            mobileno: dto.mobileno,
            emailid: dto
                .emailid
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            age: dto.age,
            gender: dto.gender,
            blood_group: dto.blood_group,
            address: dto.address.trim().to_string(),
        }
    }
}

/// Query params for the public directory search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DonorSearchQuery {
    /// Exact blood group code or id; omitted or blank matches every group
    pub blood_group: Option<String>,
    /// Case-insensitive substring of the donor address
    pub location: Option<String>,
}

/// Request DTO for the availability toggle. An absent flag flips the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonorAvailabilityDto {
    pub is_available: Option<bool>,
}

/// Full donor record, for administrators and the registering donor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorResponseDto {
    pub id: Uuid,
    pub fullname: String,
    pub mobileno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emailid: Option<String>,
    pub age: i32,
    pub gender: String,
    #[schema(value_type = String, example = "O+")]
    pub blood_group: BloodGroup,
    pub address: String,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Donor> for DonorResponseDto {
    fn from(donor: Donor) -> Self {
        Self {
            id: donor.id,
            fullname: donor.fullname,
            mobileno: donor.mobileno,
            emailid: donor.emailid,
            age: donor.age,
            gender: donor.gender,
            blood_group: donor.blood_group,
            address: donor.address,
            is_available: donor.is_available,
            last_donation_date: donor.last_donation_date,
            created_at: donor.created_at,
            updated_at: donor.updated_at,
        }
    }
}

/// Public search hit. Contact fields are only present for contactable donors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorSearchResultDto {
    pub id: Uuid,
    pub fullname: String,
    pub age: i32,
    pub gender: String,
    #[schema(value_type = String, example = "O+")]
    pub blood_group: BloodGroup,
    pub address: String,
    pub is_available: bool,
    pub contactable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobileno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emailid: Option<String>,
}

impl From<Donor> for DonorSearchResultDto {
    fn from(donor: Donor) -> Self {
        let contactable = donor.is_contactable();
        Self {
            id: donor.id,
            fullname: donor.fullname,
            age: donor.age,
            gender: donor.gender,
            blood_group: donor.blood_group,
            address: donor.address,
            is_available: donor.is_available,
            contactable,
            mobileno: contactable.then_some(donor.mobileno),
            emailid: if contactable { donor.emailid } else { None },
        }
    }
}
