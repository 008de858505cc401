mod auth_service;
mod token_service;

pub use auth_service::{AdminCredentials, AuthService};
pub use token_service::{IssuedToken, TokenService};
