pub mod contact_handler;

pub use contact_handler::{
    __path_delete_contact_message, __path_list_contact_messages, __path_mark_contact_message_read,
    __path_submit_contact_message, delete_contact_message, list_contact_messages,
    mark_contact_message_read, submit_contact_message,
};
