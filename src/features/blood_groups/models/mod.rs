mod blood_group;

pub use blood_group::BloodGroup;
