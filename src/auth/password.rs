//! Argon2 password hashing. The async wrappers run on the blocking pool.

use std::sync::{Arc, LazyLock};

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::warn;

/// Hash of a password no account has. Login verifies against it when no user
/// matched so an unknown email costs the same as a wrong password.
static DECOY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("decoy-password-never-issued").unwrap_or_default());

/// Password hashing used by the auth handlers.
pub trait PasswordHashing: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;

    /// `false` on mismatch and on a stored hash that cannot be parsed.
    fn verify(&self, hash: &str, password: &str) -> bool;

    /// A well-formed hash matching no real password.
    fn decoy_hash(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Passwords;

impl PasswordHashing for Argon2Passwords {
    fn hash(&self, password: &str) -> AppResult<String> {
        hash_password(password)
    }

    fn verify(&self, hash: &str, password: &str) -> bool {
        compare_passwords(hash, password)
    }

    fn decoy_hash(&self) -> &str {
        DECOY_HASH.as_str()
    }
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub fn compare_passwords(hash: &str, password: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "stored password hash is malformed");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_blocking(
    passwords: Arc<dyn PasswordHashing>,
    password: String,
) -> AppResult<String> {
    tokio::task::spawn_blocking(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task: {}", e)))?
}

pub async fn verify_blocking(
    passwords: Arc<dyn PasswordHashing>,
    hash: String,
    password: String,
) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || passwords.verify(&hash, &password))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))
}

/// Verify against the decoy hash; always `false`.
pub async fn verify_decoy_blocking(
    passwords: Arc<dyn PasswordHashing>,
    password: String,
) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        passwords.verify(passwords.decoy_hash(), &password);
        false
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))
}
