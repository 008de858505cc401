//! Role guard for administrative handlers.

use crate::core::error::AppError;
use crate::features::auth::model::{AdminCapability, AuthenticatedUser};
use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the verified identity and exchanges it for an [`AdminCapability`].
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(cap): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AdminCapability);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        Ok(RequireAdmin(AdminCapability::grant(user)?))
    }
}
