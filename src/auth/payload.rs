//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Missing keys decode to empty strings so they surface as validation
/// violations alongside the other fields.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginPayload {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::email(&mut errors, "email", &self.email);
        validation::required(&mut errors, "password", &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterPayload {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "firstName", &self.first_name);
        validation::required(&mut errors, "lastName", &self.last_name);
        validation::email(&mut errors, "email", &self.email);
        if validation::required(&mut errors, "password", &self.password) {
            validation::length(
                &mut errors,
                "password",
                &self.password,
                MIN_PASSWORD_LENGTH,
                MAX_PASSWORD_LENGTH,
            );
        }
        errors.into_result()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
