//! Auth HTTP handlers: register, login.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info, instrument, warn};

use crate::auth::password::{hash_blocking, verify_blocking, verify_decoy_blocking};
use crate::auth::payload::{LoginPayload, LoginResponse, RegisterPayload};
use crate::error::{AppError, AppResult};
use crate::handlers::extract::AppJson;
use crate::handlers::http::AppState;
use crate::models::NewUser;

/// POST /login
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginPayload>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    // Every failure path runs one password verification so response time
    // does not reveal whether the email is registered.
    let user = match state.store().get_user_by_email(&payload.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(email = %payload.email, "login unknown email");
            verify_decoy_blocking(state.passwords(), payload.password).await?;
            return Err(AppError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "user lookup failed");
            verify_decoy_blocking(state.passwords(), payload.password).await?;
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_blocking(state.passwords(), user.password_hash.clone(), payload.password).await? {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt().issue(user.id).map_err(|e| {
        error!(error = %e, user_id = user.id, "jwt sign failed");
        e
    })?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse { token }))
}

/// POST /register
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterPayload>,
) -> AppResult<StatusCode> {
    payload.validate()?;

    if state
        .store()
        .get_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::UserExists(payload.email));
    }

    let password_hash = hash_blocking(state.passwords(), payload.password)
        .await
        .map_err(|e| {
            error!(error = %e, "hash_password failed");
            e
        })?;

    let user = state
        .store()
        .create_user(NewUser {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password_hash,
        })
        .await
        .map_err(|e| {
            if !matches!(e, AppError::UserExists(_)) {
                error!(error = %e, "create user failed");
            }
            e
        })?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(StatusCode::CREATED)
}
