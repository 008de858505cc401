//! Donor directory: registration, compatibility search and admin management.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/donors` | No | Register a donor |
//! | GET | `/api/donors/search` | No | Search by blood group and location |
//! | GET | `/api/admin/donors` | Admin | List all donors with contact details |
//! | PUT | `/api/admin/donors/{id}` | Admin | Set or flip availability |
//! | DELETE | `/api/admin/donors/{id}` | Admin | Remove a donor |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{DonorRepository, PgDonorRepository};
pub use services::DonorService;
