//! # Login Guard
//!
//! Non-empty credential validation for a login form, with the guard
//! decoupled from any UI toolkit and hosted by a web page and a terminal.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The form guard, its element traits and the validation rule
//! - **Application Layer** ([`application`]) - Where validated submissions go
//! - **API Layer** ([`api`]) - JSON login endpoint, DTOs, and middleware
//! - **Web Layer** ([`web`]) - The HTML login page and its server-side guard host
//!
//! ## Behavior
//!
//! - Both fields blank: "Please enter username and password." (focus username)
//! - Username blank: "Please enter username." (focus username)
//! - Password blank: "Please enter password." (focus password)
//! - Otherwise the error is cleared, the user is notified and the form submits
//!
//! Whitespace-only values count as blank.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                      # serve the login page on 0.0.0.0:3000
//! cargo run --bin guard -- prompt
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LoginService, LoginSuccess};
    pub use crate::domain::elements::{
        Acknowledger, ErrorDisplay, Field, FormElements, FormTarget, SubmitEvent, TextField,
    };
    pub use crate::domain::guard::{FormEvents, FormGuard, SubmitOutcome};
    pub use crate::domain::validation::{Credentials, ValidationFailure, validate};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
