//! Blood request intake, triage ordering and the status state machine.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/blood-requests` | No | Submit a request |
//! | GET | `/api/admin/blood-requests` | Admin | Triage-ordered list, optional `?status=` |
//! | PUT | `/api/admin/blood-requests/{id}` | Admin | Status transition |
//!
//! ```text
//! pending ──► in_progress ──► fulfilled
//!    │             │
//!    └──► cancelled ◄┘
//! ```

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod triage;

pub use repository::{BloodRequestRepository, PgBloodRequestRepository};
pub use services::BloodRequestService;
