//! Blood group reference data.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/blood-groups` | No | List the fixed enumeration |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::BloodGroup;
pub use services::BloodGroupService;
