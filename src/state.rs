use std::sync::Arc;

use crate::application::services::LoginService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self { login_service }
    }
}
