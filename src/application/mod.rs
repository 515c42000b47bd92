//! Application layer services implementing business logic.
//!
//! Services sit between the hosts (HTTP handlers, the terminal tool) and the
//! domain rules, and are what a validated form ultimately submits to.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Login submission handling

pub mod services;
