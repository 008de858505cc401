pub mod donor_handler;

pub use donor_handler::{
    __path_delete_donor, __path_list_donors, __path_register_donor, __path_search_donors,
    __path_update_donor_availability, delete_donor, list_donors, register_donor, search_donors,
    update_donor_availability,
};
