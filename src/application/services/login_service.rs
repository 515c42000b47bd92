//! Login submission endpoint logic.

use serde_json::json;

use crate::domain::validation::{Credentials, ValidationFailure, validate};
use crate::error::AppError;

/// Message returned when the submission reaches the service with a blank field.
pub const MISSING_CREDENTIALS: &str = "Missing username or password";

/// Accepted login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub username: String,
    pub message: String,
}

/// Destination of a login form submission.
///
/// Re-checks the non-empty rule on its own: a submission may arrive without
/// ever passing through a bound guard. There is no user store; every
/// non-blank pair is accepted.
#[derive(Debug, Default, Clone)]
pub struct LoginService;

impl LoginService {
    pub fn new() -> Self {
        Self
    }

    /// Handles a raw submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`MISSING_CREDENTIALS`] if either
    /// value is blank after trimming. `details.reason` names which one.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginSuccess, AppError> {
        let credentials = validate(username, password).map_err(missing_credentials)?;

        Ok(self.accept(credentials))
    }

    /// Handles a submission that has already been validated.
    pub fn accept(&self, credentials: Credentials) -> LoginSuccess {
        let username = credentials.username().to_string();
        tracing::info!(username = %username, "Successful login");

        LoginSuccess {
            message: format!("Login Successful! Welcome {}", username),
            username,
        }
    }
}

/// Rejection for a submission with blank fields.
///
/// `details.reason` is the failure code and `details.fields` the blank
/// fields in form order.
pub fn missing_credentials(failure: ValidationFailure) -> AppError {
    tracing::info!(reason = failure.code(), "Rejected login submission");

    let fields: Vec<&str> = failure.missing_fields().iter().map(|f| f.id()).collect();
    AppError::bad_request(
        MISSING_CREDENTIALS,
        json!({
            "reason": failure.code(),
            "fields": fields,
        }),
    )
}
