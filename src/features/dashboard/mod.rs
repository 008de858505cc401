//! Read-only aggregate statistics for the admin dashboard.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/dashboard` | Admin | Counts, blood group distribution, recent activity |

pub mod dtos;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{DashboardRepository, DashboardSnapshot, PgDashboardRepository};
pub use services::DashboardService;
