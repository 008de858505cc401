mod blood_group_dto;

pub use blood_group_dto::*;
