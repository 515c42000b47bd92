//! Web layer for the browser login page.
//!
//! Renders the login form with Askama and hosts the form guard on the
//! server side, so a submission is validated even when nothing ran in the
//! browser.
//!
//! # Modules
//!
//! - [`form`] - Element implementations backed by a posted form
//! - [`handlers`] - Page rendering and submission handlers
//! - [`routes`] - Login page route configuration

pub mod form;
pub mod handlers;
pub mod routes;
