pub mod blood_request_handler;

pub use blood_request_handler::{
    __path_list_blood_requests, __path_submit_blood_request, __path_update_blood_request_status,
    list_blood_requests, submit_blood_request, update_blood_request_status,
};
