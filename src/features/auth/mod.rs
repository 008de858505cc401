//! Admin authentication.
//!
//! A single configured administrator logs in with e-mail and password and
//! receives an HS256 bearer token. `auth_middleware` verifies that token on
//! every `/api/admin/*` route, and the [`guards::RequireAdmin`] extractor turns
//! the verified identity into an [`model::AdminCapability`].

mod validator;

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AdminCredentials, AuthService, TokenService};
pub use validator::JwtValidator;
