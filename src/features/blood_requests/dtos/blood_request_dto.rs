use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::blood_groups::BloodGroup;
use crate::features::blood_requests::models::{
    BloodRequest, NewBloodRequest, RequestStatus, UrgencyLevel,
};
use crate::shared::validation::{blank_as_none, not_blank, PHONE_REGEX};

/// Request DTO for submitting a blood request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestDto {
    #[validate(
        length(max = 255, message = "Patient name must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub patient_name: String,

    /// Code ("O-") or reference id (8)
    #[schema(value_type = String, example = "O-")]
    pub blood_group: BloodGroup,

    #[validate(range(min = 1, max = 10, message = "Units required must be between 1 and 10"))]
    pub units_required: i32,

    #[validate(
        length(max = 255, message = "Hospital name must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub hospital_name: String,

    #[validate(custom(function = "not_blank"))]
    pub hospital_address: String,

    #[validate(
        length(max = 255, message = "Contact person must not exceed 255 characters"),
        custom(function = "not_blank")
    )]
    pub contact_person: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone_number: String,

    pub urgency_level: UrgencyLevel,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 2000, message = "Additional info must not exceed 2000 characters"))]
    pub additional_info: Option<String>,
}

impl From<CreateBloodRequestDto> for NewBloodRequest {
    fn from(dto: CreateBloodRequestDto) -> Self {
        Self {
            patient_name: dto.patient_name.trim().to_string(),
            blood_group: dto.blood_group,
            units_required: dto.units_required,
            hospital_name: dto.hospital_name.trim().to_string(),
            hospital_address: dto.hospital_address.trim().to_string(),
            contact_person: dto.contact_person.trim().to_string(),
            phone_number: dto.phone_number.trim().to_string(),
            urgency_level: dto.urgency_level,
            additional_info: dto
                .additional_info
                .map(|info| info.trim().to_string())
                .filter(|info| !info.is_empty()),
        }
    }
}

/// Request DTO for a status transition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusDto {
    pub status: RequestStatus,
    /// Version the caller last read. When present and stale the update is
    /// refused with 409.
    pub expected_version: Option<i32>,
}

/// Query params for the admin triage list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BloodRequestListQuery {
    /// Only requests in this status (pending, in_progress, fulfilled, cancelled)
    pub status: Option<String>,
}

/// Response DTO for blood request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestResponseDto {
    pub id: Uuid,
    pub patient_name: String,
    pub blood_group: String,
    pub units_required: i32,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_person: String,
    pub phone_number: String,
    pub urgency_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub status: RequestStatus,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BloodRequest> for BloodRequestResponseDto {
    fn from(r: BloodRequest) -> Self {
        Self {
            id: r.id,
            patient_name: r.patient_name,
            blood_group: r.blood_group,
            units_required: r.units_required,
            hospital_name: r.hospital_name,
            hospital_address: r.hospital_address,
            contact_person: r.contact_person,
            phone_number: r.phone_number,
            urgency_level: r.urgency_level,
            additional_info: r.additional_info,
            status: r.status,
            version: r.version,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "patientName": "John Smith",
            "bloodGroup": "O-",
            "unitsRequired": 2,
            "hospitalName": "Mercy General",
            "hospitalAddress": "4 Hospital Rd",
            "contactPerson": "Dr. Lee",
            "phoneNumber": "+1 (555) 987-6543",
            "urgencyLevel": "immediate"
        })
    }

    #[test]
    fn test_valid_payload() {
        let dto: CreateBloodRequestDto = serde_json::from_value(payload()).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.urgency_level, UrgencyLevel::Immediate);
        assert!(dto.additional_info.is_none());
    }

    #[test]
    fn test_units_bounds() {
        let mut dto: CreateBloodRequestDto = serde_json::from_value(payload()).unwrap();
        dto.units_required = 0;
        assert!(dto.validate().is_err());
        dto.units_required = 11;
        assert!(dto.validate().is_err());
        dto.units_required = 10;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_urgency_or_group_fails_to_parse() {
        let mut value = payload();
        value["urgencyLevel"] = json!("whenever");
        assert!(serde_json::from_value::<CreateBloodRequestDto>(value).is_err());

        let mut value = payload();
        value["bloodGroup"] = json!("C+");
        assert!(serde_json::from_value::<CreateBloodRequestDto>(value).is_err());
    }

    #[test]
    fn test_blank_patient_name_rejected() {
        let mut dto: CreateBloodRequestDto = serde_json::from_value(payload()).unwrap();
        dto.patient_name = "  ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_status_dto_rejects_unknown_status() {
        assert!(serde_json::from_value::<UpdateRequestStatusDto>(json!({ "status": "done" })).is_err());

        let dto: UpdateRequestStatusDto =
            serde_json::from_value(json!({ "status": "in_progress", "expectedVersion": 3 })).unwrap();
        assert_eq!(dto.status, RequestStatus::InProgress);
        assert_eq!(dto.expected_version, Some(3));
    }
}
