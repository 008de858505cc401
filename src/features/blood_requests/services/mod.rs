mod blood_request_service;

pub use blood_request_service::BloodRequestService;
