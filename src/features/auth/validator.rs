use super::model::{AuthenticatedUser, Claims};
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use std::time::Duration;

const INVALID_TOKEN: &str = "Invalid or expired token";

fn rejected(reason: impl std::fmt::Display) -> AppError {
    tracing::debug!("Token rejected: {}", reason);
    AppError::Forbidden(INVALID_TOKEN.to_string())
}

/// Verifies HS256 admin tokens signed with the shared secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway: leeway.as_secs(),
        }
    }

    /// Any verification failure maps to 403 with one fixed message; the
    /// decoder's reason is only logged.
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(rejected)?;

        if header.alg != Algorithm::HS256 {
            return Err(rejected(format!("unsupported algorithm {:?}", header.alg)));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(rejected)?;

        let claims = token_data.claims;
        if claims.sub.is_empty() {
            return Err(AppError::Forbidden("Token has no subject".to_string()));
        }

        Ok(AuthenticatedUser {
            sub: claims.sub,
            role: claims.role,
        })
    }
}
