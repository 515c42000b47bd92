//! DTOs for the JSON login endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::LoginSuccess;
use crate::domain::validation::is_blank;

/// Login request body.
///
/// Both fields must contain something other than whitespace.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Accepted login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub message: String,
}

impl From<LoginSuccess> for LoginResponse {
    fn from(success: LoginSuccess) -> Self {
        Self {
            username: success.username,
            message: success.message,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
