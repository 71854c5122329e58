//! Application error types and their HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Message shared by every login failure so callers cannot tell
/// an unknown email from a wrong password.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadPayload(String),

    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("user with email {0} already exists")]
    UserExists(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadPayload(_)
            | AppError::Validation(_)
            | AppError::InvalidCredentials
            | AppError::UserExists(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Hash(_) | AppError::Jwt(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
