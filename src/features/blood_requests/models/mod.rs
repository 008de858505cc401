mod blood_request;

pub use blood_request::{BloodRequest, NewBloodRequest, RequestStatus, UrgencyLevel};
