pub mod auth;
pub mod blood_groups;
pub mod blood_requests;
pub mod contact;
pub mod dashboard;
pub mod donors;
