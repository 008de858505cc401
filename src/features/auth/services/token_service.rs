use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;

/// A freshly signed access token and its lifetime in seconds.
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Signs HS256 access tokens with the shared secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, subject: &str, role: &str) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let expires_in = self.ttl.as_secs() as i64;
        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + expires_in,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::JwtValidator;

    #[test]
    fn test_issued_token_verifies() {
        let service = TokenService::new("s3cret", Duration::from_secs(3600));
        let token = service.issue("admin@redconnect.test", "admin").unwrap();
        assert_eq!(token.expires_in, 3600);

        let user = JwtValidator::new("s3cret", Duration::from_secs(0))
            .validate_token(&token.access_token)
            .unwrap();
        assert_eq!(user.sub, "admin@redconnect.test");
        assert_eq!(user.role, "admin");
    }
}
