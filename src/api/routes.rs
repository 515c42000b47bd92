//! API route configuration.

use crate::api::handlers::login_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /login` - Log in with a JSON body
pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login_handler))
}
