use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::TokenService;
use crate::shared::constants::ROLE_ADMIN;

/// Credentials of the single configured administrator.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// Admin login against the configured account.
pub struct AuthService {
    credentials: AdminCredentials,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(credentials: AdminCredentials, token_service: Arc<TokenService>) -> Self {
        Self {
            credentials,
            token_service,
        }
    }

    pub fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email_matches = dto
            .email
            .trim()
            .eq_ignore_ascii_case(self.credentials.email.trim());

        if !email_matches || dto.password != self.credentials.password {
            tracing::warn!("Failed admin login attempt for {}", dto.email);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let email = self.credentials.email.clone();
        let token = self.token_service.issue(&email, ROLE_ADMIN)?;
        tracing::info!("Admin logged in: {}", email);

        Ok(AuthResponseDto {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user: AuthUserDto {
                email,
                role: ROLE_ADMIN.to_string(),
            },
        })
    }

    pub fn get_current_user(&self, user: AuthenticatedUser) -> MeResponseDto {
        user.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service() -> AuthService {
        AuthService::new(
            AdminCredentials {
                email: "admin@redconnect.test".to_string(),
                password: "correct horse".to_string(),
            },
            Arc::new(TokenService::new("secret", Duration::from_secs(60))),
        )
    }

    #[test]
    fn test_login_success() {
        let response = service()
            .login(LoginRequestDto {
                email: "Admin@RedConnect.test".to_string(),
                password: "correct horse".to_string(),
            })
            .unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.role, "admin");
        assert!(!response.access_token.is_empty());
    }

    #[test]
    fn test_login_wrong_password() {
        let err = service()
            .login(LoginRequestDto {
                email: "admin@redconnect.test".to_string(),
                password: "battery staple".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_login_unknown_email() {
        let err = service()
            .login(LoginRequestDto {
                email: "intruder@redconnect.test".to_string(),
                password: "correct horse".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
