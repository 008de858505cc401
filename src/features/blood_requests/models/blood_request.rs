use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::blood_groups::BloodGroup;

/// Lifecycle status of a blood request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Fulfilled,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Fulfilled => "fulfilled",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    /// Legal moves. Same-state is handled by the caller as a no-op and is not
    /// a transition.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress) | (Pending, Cancelled) | (InProgress, Fulfilled) | (InProgress, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Fulfilled | RequestStatus::Cancelled)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "in_progress" => Ok(RequestStatus::InProgress),
            "fulfilled" => Ok(RequestStatus::Fulfilled),
            "cancelled" => Ok(RequestStatus::Cancelled),
            other => Err(format!("Unknown request status: {}", other)),
        }
    }
}

/// Urgency accepted at intake. Stored as text, so rows written by other
/// clients may carry values outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Immediate,
    Urgent,
    Normal,
}

impl UrgencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Immediate => "immediate",
            UrgencyLevel::Urgent => "urgent",
            UrgencyLevel::Normal => "normal",
        }
    }

    /// Triage rank of a stored urgency value; lower is more urgent and
    /// unrecognised values rank last.
    pub fn rank_of(stored: &str) -> u8 {
        match stored.trim().to_ascii_lowercase().as_str() {
            "immediate" => 0,
            "urgent" => 1,
            "normal" => 2,
            _ => 3,
        }
    }
}

/// Database model for blood request
#[derive(Debug, Clone, FromRow)]
pub struct BloodRequest {
    pub id: Uuid,
    pub patient_name: String,
    pub blood_group: String,
    pub units_required: i32,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_person: String,
    pub phone_number: String,
    pub urgency_level: String,
    pub additional_info: Option<String>,
    pub status: RequestStatus,
    /// Bumped on every status write; guards against lost updates
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BloodRequest {
    pub fn urgency_rank(&self) -> u8 {
        UrgencyLevel::rank_of(&self.urgency_level)
    }
}

/// Data for a new blood request (already validated)
#[derive(Debug, Clone)]
pub struct NewBloodRequest {
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub units_required: i32,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_person: String,
    pub phone_number: String,
    pub urgency_level: UrgencyLevel,
    pub additional_info: Option<String>,
}
