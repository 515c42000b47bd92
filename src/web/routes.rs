//! Login page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public login page routes.
///
/// # Endpoints
///
/// - `GET  /`      - Login page
/// - `GET  /login` - Login page
/// - `POST /login` - Guarded form submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page_handler))
        .route("/login", get(login_page_handler).post(login_submit_handler))
}
