pub mod blood_group_handler;

pub use blood_group_handler::{__path_list_blood_groups, list_blood_groups};
