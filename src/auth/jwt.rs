//! JWT issue and validation.

use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Unix timestamp (seconds) after which the token is rejected.
    #[serde(rename = "expiredAt")]
    pub expired_at: i64,
}

impl Claims {
    pub fn user_id(&self) -> AppResult<i64> {
        self.user_id
            .parse()
            .map_err(|_| AppError::Jwt(format!("malformed userID claim: {}", self.user_id)))
    }
}

/// Sign an HS256 token for `user_id` valid for `expiration_seconds`.
pub fn create_jwt(secret: &[u8], user_id: i64, expiration_seconds: i64) -> AppResult<String> {
    if secret.is_empty() {
        return Err(AppError::Jwt("signing secret is empty".to_string()));
    }
    let expired_at = Duration::try_seconds(expiration_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| AppError::Jwt("expiration out of range".to_string()))?
        .timestamp();
    let claims = Claims {
        user_id: user_id.to_string(),
        expired_at,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::Jwt(e.to_string()))?;
    debug!(user_id, expired_at, "jwt signed");
    Ok(token)
}

/// Check the signature and the `expiredAt` claim.
pub fn verify_jwt(secret: &[u8], token: &str) -> AppResult<Claims> {
    // `expiredAt` replaces the registered `exp` claim, so expiry is checked here.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| AppError::Jwt(e.to_string()))?;
    if data.claims.expired_at <= Utc::now().timestamp() {
        return Err(AppError::Jwt("token expired".to_string()));
    }
    Ok(data.claims)
}

/// Signing secret and token lifetime taken from `Config`.
#[derive(Clone)]
pub struct JwtIssuer {
    secret: String,
    expiration_seconds: i64,
}

impl JwtIssuer {
    pub fn new(secret: String, expiration_seconds: i64) -> Self {
        Self {
            secret,
            expiration_seconds,
        }
    }

    pub fn issue(&self, user_id: i64) -> AppResult<String> {
        create_jwt(self.secret.as_bytes(), user_id, self.expiration_seconds)
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        verify_jwt(self.secret.as_bytes(), token)
    }
}
