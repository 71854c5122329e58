//! Shared application state and the health probe.

use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::{Argon2Passwords, JwtIssuer, PasswordHashing};
use crate::config::Config;
use crate::store::UserStore;

/// Shared application state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn UserStore>,
    pub jwt: JwtIssuer,
    pub passwords: Arc<dyn PasswordHashing>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn UserStore>) -> Self {
        let jwt = JwtIssuer::new(config.jwt_secret.clone(), config.jwt_expiration_seconds);
        Self {
            config: Arc::new(config),
            store,
            jwt,
            passwords: Arc::new(Argon2Passwords),
        }
    }

    /// Replace the password hashing scheme (Argon2 by default).
    pub fn with_passwords(mut self, passwords: Arc<dyn PasswordHashing>) -> Self {
        self.passwords = passwords;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
    pub fn jwt(&self) -> &JwtIssuer {
        &self.jwt
    }
    pub fn passwords(&self) -> Arc<dyn PasswordHashing> {
        self.passwords.clone()
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "ecom" })),
    )
}
