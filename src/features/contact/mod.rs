//! Contact form submissions and the admin inbox.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact` | No | Send a message |
//! | GET | `/api/admin/contact-messages` | Admin | Inbox, newest first |
//! | PUT | `/api/admin/contact-messages/{id}/read` | Admin | Mark as read |
//! | DELETE | `/api/admin/contact-messages/{id}` | Admin | Delete a message |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{ContactRepository, PgContactRepository};
pub use services::ContactService;
