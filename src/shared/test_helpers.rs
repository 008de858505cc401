//! In-memory repositories and request fixtures for handler and service tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, response::Response, Router};
use chrono::Utc;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::model::{AdminCapability, AuthenticatedUser};
use crate::features::blood_groups::BloodGroup;
use crate::features::blood_requests::models::{BloodRequest, NewBloodRequest, RequestStatus};
use crate::features::blood_requests::BloodRequestRepository;
use crate::features::contact::models::{ContactMessage, NewContactMessage};
use crate::features::contact::ContactRepository;
use crate::features::dashboard::{DashboardRepository, DashboardSnapshot};
use crate::features::donors::models::{Donor, DonorFilter, NewDonor};
use crate::features::donors::DonorRepository;
use crate::shared::constants::ROLE_ADMIN;

pub const TEST_ADMIN_EMAIL: &str = "admin@redconnect.test";

pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: TEST_ADMIN_EMAIL.to_string(),
        role: ROLE_ADMIN.to_string(),
    }
}

pub fn admin_capability() -> AdminCapability {
    AdminCapability::grant(&create_admin_user()).unwrap()
}

async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

/// Stands in for the JWT middleware: every request arrives as the test admin.
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

// =============================================================================
// Payload fixtures
// =============================================================================

pub fn fake_donor_payload(blood_group: &str, address: &str) -> Value {
    let mobile: u64 = (1_000_000_000u64..9_999_999_999u64).fake();
    json!({
        "fullname": Name().fake::<String>(),
        "mobileno": mobile.to_string(),
        "emailid": SafeEmail().fake::<String>(),
        "age": (18..=65).fake::<i32>(),
        "gender": "female",
        "bloodGroup": blood_group,
        "address": address,
    })
}

pub fn fake_blood_request_payload(blood_group: &str, urgency: &str) -> Value {
    json!({
        "patientName": Name().fake::<String>(),
        "bloodGroup": blood_group,
        "unitsRequired": (1..=10).fake::<i32>(),
        "hospitalName": format!("{} General Hospital", CityName().fake::<String>()),
        "hospitalAddress": StreetName().fake::<String>(),
        "contactPerson": Name().fake::<String>(),
        "phoneNumber": "+1 (555) 987-6543",
        "urgencyLevel": urgency,
    })
}

// =============================================================================
// In-memory repositories
// =============================================================================

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, Uuid)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[derive(Default)]
pub struct InMemoryDonorRepository {
    donors: Mutex<Vec<Donor>>,
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn insert(&self, donor: NewDonor) -> Result<Donor> {
        let now = Utc::now();
        let donor = Donor {
            id: Uuid::now_v7(),
            fullname: donor.fullname,
            mobileno: donor.mobileno,
            emailid: donor.emailid,
            age: donor.age,
            gender: donor.gender.as_str().to_string(),
            blood_group: donor.blood_group,
            address: donor.address,
            is_available: true,
            last_donation_date: None,
            created_at: now,
            updated_at: now,
        };
        self.donors.lock().unwrap().push(donor.clone());
        Ok(donor)
    }

    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>> {
        let mut hits: Vec<Donor> = self
            .donors
            .lock()
            .unwrap()
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        newest_first(&mut hits, |d| (d.created_at, d.id));
        Ok(hits)
    }

    async fn update_availability(
        &self,
        id: Uuid,
        available: Option<bool>,
    ) -> Result<Option<Donor>> {
        let mut donors = self.donors.lock().unwrap();
        Ok(donors.iter_mut().find(|d| d.id == id).map(|d| {
            d.is_available = available.unwrap_or(!d.is_available);
            d.updated_at = Utc::now();
            d.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut donors = self.donors.lock().unwrap();
        let before = donors.len();
        donors.retain(|d| d.id != id);
        Ok(donors.len() < before)
    }

}

#[derive(Default)]
pub struct InMemoryBloodRequestRepository {
    requests: Mutex<Vec<BloodRequest>>,
    interfering: Mutex<HashSet<Uuid>>,
}

impl InMemoryBloodRequestRepository {
    /// Simulates another writer committing between a caller's read and its
    /// conditional write: the next `update_status` on `id` sees a newer version.
    pub fn bump_version_on_next_update(&self, id: Uuid) {
        self.interfering.lock().unwrap().insert(id);
    }
}

#[async_trait]
impl BloodRequestRepository for InMemoryBloodRequestRepository {
    async fn insert(&self, request: NewBloodRequest) -> Result<BloodRequest> {
        let now = Utc::now();
        let request = BloodRequest {
            id: Uuid::now_v7(),
            patient_name: request.patient_name,
            blood_group: request.blood_group.code().to_string(),
            units_required: request.units_required,
            hospital_name: request.hospital_name,
            hospital_address: request.hospital_address,
            contact_person: request.contact_person,
            phone_number: request.phone_number,
            urgency_level: request.urgency_level.as_str().to_string(),
            additional_info: request.additional_info,
            status: RequestStatus::Pending,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<BloodRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BloodRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected_version: i32,
        status: RequestStatus,
    ) -> Result<Option<BloodRequest>> {
        let interfered = self.interfering.lock().unwrap().remove(&id);
        let mut requests = self.requests.lock().unwrap();
        let Some(request) = requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if interfered {
            request.version += 1;
        }
        if request.version != expected_version {
            return Ok(None);
        }

        request.status = status;
        request.version += 1;
        request.updated_at = Utc::now();
        Ok(Some(request.clone()))
    }

}

#[derive(Default)]
pub struct InMemoryContactRepository {
    messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let message = ContactMessage {
            id: Uuid::now_v7(),
            name: message.name,
            email: message.email,
            phone: message.phone,
            subject: message.subject,
            message: message.message,
            is_read: false,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>> {
        let mut all = self.messages.lock().unwrap().clone();
        newest_first(&mut all, |m| (m.created_at, m.id));
        Ok(all)
    }

    async fn mark_read(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        let mut messages = self.messages.lock().unwrap();
        Ok(messages.iter_mut().find(|m| m.id == id).map(|m| {
            m.is_read = true;
            m.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() < before)
    }

}

/// Dashboard reads over the in-memory feature repositories. A single test
/// task never interleaves writes, so each read is already consistent.
pub struct InMemoryDashboardRepository {
    donors: Arc<InMemoryDonorRepository>,
    requests: Arc<InMemoryBloodRequestRepository>,
    messages: Arc<InMemoryContactRepository>,
}

impl InMemoryDashboardRepository {
    pub fn new(
        donors: Arc<InMemoryDonorRepository>,
        requests: Arc<InMemoryBloodRequestRepository>,
        messages: Arc<InMemoryContactRepository>,
    ) -> Self {
        Self {
            donors,
            requests,
            messages,
        }
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepository {
    async fn snapshot(&self, recent_limit: i64) -> Result<DashboardSnapshot> {
        let limit = recent_limit as usize;
        let available = DonorFilter::new().available(true);

        let donors = self.donors.search(&DonorFilter::new()).await?;
        let mut requests = self.requests.list(None).await?;
        newest_first(&mut requests, |r| (r.created_at, r.id));
        let messages = self.messages.list().await?;

        Ok(DashboardSnapshot {
            total_donors: donors.len() as i64,
            available_donors: donors.iter().filter(|d| available.matches(d)).count() as i64,
            total_requests: requests.len() as i64,
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count() as i64,
            total_messages: messages.len() as i64,
            unread_messages: messages.iter().filter(|m| !m.is_read).count() as i64,
            blood_group_distribution: BloodGroup::ALL
                .into_iter()
                .map(|g| (g, donors.iter().filter(|d| d.blood_group == g).count() as i64))
                .collect(),
            recent_donors: donors.into_iter().take(limit).collect(),
            recent_requests: requests.into_iter().take(limit).collect(),
        })
    }
}
