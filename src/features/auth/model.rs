use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::shared::constants::ROLE_ADMIN;

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject of the token (the administrator e-mail)
    pub sub: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// Proof that the current request was made by a verified administrator.
///
/// It can only be obtained from an [`AuthenticatedUser`] holding the admin role,
/// and every administrative service operation takes one by reference, so the
/// services never consult ambient configuration to authorize a call.
#[derive(Debug, Clone)]
pub struct AdminCapability {
    admin: String,
}

impl AdminCapability {
    pub fn grant(user: &AuthenticatedUser) -> Result<Self, AppError> {
        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(Self {
            admin: user.sub.clone(),
        })
    }

    /// Who is acting, for audit logging.
    pub fn admin(&self) -> &str {
        &self.admin
    }
}

/// JWT claims carried by admin access tokens (HS256).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_granted_to_admin() {
        let user = AuthenticatedUser {
            sub: "admin@redconnect.test".to_string(),
            role: "admin".to_string(),
        };
        let cap = AdminCapability::grant(&user).unwrap();
        assert_eq!(cap.admin(), "admin@redconnect.test");
    }

    #[test]
    fn test_capability_refused_without_admin_role() {
        let user = AuthenticatedUser {
            sub: "someone@redconnect.test".to_string(),
            role: "viewer".to_string(),
        };
        let err = AdminCapability::grant(&user).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
