//! Minimal e-commerce backend: user registration, login and JWT issuance.
//!
//! Users live behind the [`store::UserStore`] trait, backed by MySQL in
//! production and by [`store::InMemoryUserStore`] in tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::trace::TraceLayer;

/// Build the API router (login, register, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/health", get(http::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
