//! Handler for the JSON login endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::application::services::login_service::missing_credentials;
use crate::domain::validation::ValidationFailure;
use crate::error::AppError;
use crate::state::AppState;

/// Logs in with a JSON body.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request
///
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "username": "alice", "message": "Login Successful! Welcome alice" }
/// ```
///
/// # Errors
///
/// Returns `400 Bad Request` if the body is not valid JSON or if either
/// field is blank. Blank fields get the same body as a rejected form post:
/// `details.reason` is the failure code, `details.fields` the blank fields.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": rejection.body_text() }))
    })?;

    if let Err(errors) = payload.validate() {
        let blank = errors.field_errors();
        return Err(
            match ValidationFailure::from_blank(
                blank.contains_key("username"),
                blank.contains_key("password"),
            ) {
                Some(failure) => missing_credentials(failure),
                None => AppError::bad_request("Invalid login request", json!(errors)),
            },
        );
    }

    let success = state
        .login_service
        .login(&payload.username, &payload.password)?;

    Ok(Json(success.into()))
}
