mod blood_group_service;

pub use blood_group_service::BloodGroupService;
