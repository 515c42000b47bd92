#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use login_guard::application::services::LoginService;
use login_guard::routes::app_router;
use login_guard::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LoginService::new()))
}

/// Full application router served over a real socket, so the rate limiter
/// sees a peer address.
pub fn create_test_server() -> TestServer {
    let app = app_router(create_test_state(), STATIC_DIR);

    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}
