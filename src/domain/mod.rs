//! Domain layer: the login form guard and its validation rule.
//!
//! Nothing here depends on a UI toolkit or on HTTP. Hosts implement the
//! traits in [`elements`] and drive a [`guard::FormGuard`] through
//! [`guard::FormEvents`].
//!
//! # Modules
//!
//! - [`elements`] - Collaborator traits (form, text field, error display, notices)
//! - [`validation`] - Trimmed non-empty rule and its three failure messages
//! - [`guard`] - The guard that wires validation to the elements

pub mod elements;
pub mod guard;
pub mod validation;

pub use elements::{Field, FormElements};
pub use guard::{FormEvents, FormGuard, SubmitOutcome};
pub use validation::{Credentials, ValidationFailure, validate};
