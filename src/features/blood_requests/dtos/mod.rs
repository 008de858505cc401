mod blood_request_dto;

pub use blood_request_dto::*;
